/*
 * Copyright (c) 2022-2023 Antmicro <www.antmicro.com>
 *
 * SPDX-License-Identifier: Apache-2.0
 */

use std::convert::Infallible;
use std::ffi::{CString, NulError};
use std::iter;

use color_eyre::Report;
use nix::unistd::execvp;

fn exec_args(command: &str, args: &[String]) -> Result<Vec<CString>, NulError> {
    iter::once(command)
        .chain(args.iter().map(String::as_str))
        .map(CString::new)
        .collect()
}

/// Replace the current process image, resolving `command` through PATH.
/// The command name itself becomes argument zero. Returns only on failure.
pub fn replace_image(command: &str, args: &[String]) -> Result<Infallible, Report> {
    let argv = exec_args(command, args)?;
    Ok(execvp(&argv[0], &argv)?)
}
