// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! The process-wide reporter.
//!
//! Log consumers expect one segment/case numbering per process, so test
//! drivers that cannot thread a [`Reporter`] through their code install a
//! single instance here, once, at startup.

use spin::Once;

use crate::{Reporter, UtBsp, UtError, UtResult};

pub type GlobalReporter = Reporter<&'static dyn UtBsp>;

static REPORTER: Once<GlobalReporter> = Once::new();

/// Installs the process-wide reporter over `bsp`.
pub fn install(bsp: &'static dyn UtBsp) -> UtResult<&'static GlobalReporter> {
    let mut installed = false;
    let reporter = REPORTER.call_once(|| {
        installed = true;
        Reporter::new(bsp)
    });
    if installed {
        Ok(reporter)
    } else {
        warn!("reporter already installed, keeping the first one");
        Err(UtError::AlreadyInstalled)
    }
}

/// The installed reporter, if any.
pub fn reporter() -> Option<&'static GlobalReporter> {
    REPORTER.get()
}
