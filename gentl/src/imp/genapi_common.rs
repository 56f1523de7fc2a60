/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

pub(super) const SCHEME_MAJOR_VERSION: u64 = 1;
pub(super) const SCHEME_MINOR_VERSION: u64 = 1;
pub(super) const SCHEME_SUBMINOR_VERSION: u64 = 0;

pub(super) const GENTL_VERSION_MAJOR: u32 = 1;
pub(super) const GENTL_VERSION_MINOR: u32 = 6;
