/*
 * Copyright (c) 2022-2023 Antmicro <www.antmicro.com>
 *
 * SPDX-License-Identifier: Apache-2.0
 */

use std::env;
use std::path::PathBuf;
use std::process;

use clap::{Arg, Command};

use notty::{replace_image, TtyHandle, EXIT_FAILURE};

fn main() {
    let name = {
        let mut path = PathBuf::from(
            env::args()
                .next()
                .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string()),
        );
        path.set_extension("");
        path.file_name().unwrap().to_str().unwrap().to_string()
    };
    let matches = Command::new(name)
        .version(format!(
            "{}-{} ({})",
            env!("CARGO_PKG_VERSION"),
            env!("NOTTY_COMMIT_HASH"),
            env!("NOTTY_TARGET"),
        ))
        .about("Run a command detached from the controlling terminal")
        .help_template(
            "{before-help}{bin} {version}\n\
            {about-with-newline}\n\
            {usage-heading}\n\t{usage}\n\
            {all-args}{after-help}",
        )
        // COMMAND - first value is the command itself, the rest is passed
        // to it unchanged
        .arg(
            Arg::new("COMMAND")
                .help("Command to run without a controlling terminal, with its arguments")
                .required(true)
                .num_args(1..)
                .allow_hyphen_values(true)
                .trailing_var_arg(true)
                .index(1),
        )
        .get_matches();

    let mut values = matches.get_many::<String>("COMMAND").unwrap();
    let command = values.next().unwrap().clone();
    let args = values.cloned().collect::<Vec<String>>();

    // detaching is best effort; the handle is dropped, and with it the
    // descriptor closed, before the exec below
    if let Some(tty) = TtyHandle::open() {
        if let Err(err) = tty.disconnect() {
            eprintln!(
                "{}: unable to detach controlling tty: {}",
                env!("CARGO_PKG_NAME"),
                err
            );
        }
    }

    if let Err(err) = replace_image(&command, &args) {
        eprintln!("{}: {}: {}", env!("CARGO_PKG_NAME"), command, err);
        process::exit(EXIT_FAILURE);
    }
    unreachable!()
}
