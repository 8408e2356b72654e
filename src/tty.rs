/*
 * Copyright (c) 2022-2023 Antmicro <www.antmicro.com>
 *
 * SPDX-License-Identifier: Apache-2.0
 */

use std::os::unix::prelude::RawFd;

use nix::errno::Errno;
use nix::fcntl::{open, OFlag};
use nix::sys::stat::Mode;
use nix::unistd::close;

pub const TTY_DEVICE: &str = "/dev/tty";

nix::ioctl_none_bad!(tiocnotty, nix::libc::TIOCNOTTY);

/// Owned descriptor for the controlling terminal, closed on drop
pub struct TtyHandle {
    fd: RawFd,
}

impl TtyHandle {
    // a process without a controlling terminal cannot open the tty device,
    // so a failed open means there is nothing to detach from
    pub fn open() -> Option<TtyHandle> {
        open(TTY_DEVICE, OFlag::O_RDWR, Mode::empty())
            .ok()
            .map(|fd| TtyHandle { fd })
    }

    pub fn disconnect(&self) -> Result<(), Errno> {
        unsafe { tiocnotty(self.fd) }?;
        Ok(())
    }
}

impl Drop for TtyHandle {
    fn drop(&mut self) {
        let _ = close(self.fd);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nix::fcntl::{fcntl, FcntlArg};
    use nix::unistd::pipe;

    #[test]
    fn descriptor_closed_even_when_disconnect_fails() {
        let (read_fd, write_fd) = pipe().unwrap();
        close(write_fd).unwrap();

        let handle = TtyHandle { fd: read_fd };
        // a pipe is not a terminal
        assert_eq!(handle.disconnect(), Err(Errno::ENOTTY));
        drop(handle);

        assert_eq!(fcntl(read_fd, FcntlArg::F_GETFD), Err(Errno::EBADF));
    }

    #[test]
    fn open_without_controlling_terminal_is_not_an_error() {
        // yields None in detached environments, Some otherwise; the handle
        // is dropped without disconnecting so the test run keeps its tty
        let _ = TtyHandle::open();
    }
}
