/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Small helpers shared by the `u3v` and `gige` control handles.

use std::io::Read;

use crate::ControlError;

macro_rules! unwrap_or_log {
    ($expr:expr) => {{
        use tracing::error;
        match $expr {
            Ok(v) => v,
            Err(error) => {
                error!(?error);
                return Err(error.into());
            }
        }
    }};
}

macro_rules! ensure {
    ($cond:expr, $err:expr) => {
        if !($cond) {
            return Err($err);
        }
    };
}

/// Extracts the single `GenApi` XML file contained in a zip archive.
pub(crate) fn unzip_genxml(zipped: &[u8]) -> Result<Vec<u8>, ControlError> {
    let mut zip = zip::ZipArchive::new(std::io::Cursor::new(zipped))
        .map_err(|e| ControlError::InvalidData(e.to_string().into()))?;
    if zip.len() != 1 {
        return Err(ControlError::InvalidData(
            "zipped GenApi XML must contain exactly one file".into(),
        ));
    }
    let mut file = zip
        .by_index(0)
        .map_err(|e| ControlError::InvalidData(e.to_string().into()))?;
    let mut buf = Vec::with_capacity(file.size() as usize);
    file.read_to_end(&mut buf)
        .map_err(|e| ControlError::Io(anyhow::Error::msg(e.to_string())))?;
    Ok(buf)
}
