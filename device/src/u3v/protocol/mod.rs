/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

pub mod ack;
pub mod cmd;
pub mod event;
pub mod stream;

pub mod prelude {
    pub use super::ack::ParseScd;
    pub use super::cmd::CommandScd;
}
