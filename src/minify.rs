/*!
# `VMinL`: File Worker
*/

use crate::{
	error::VminlError,
	features::Features,
};
use std::path::PathBuf;



#[derive(Debug)]
/// # A View File Being Minified.
pub(super) struct ViewFile<'a> {
	/// # Source Path.
	src: &'a PathBuf,

	/// # Raw Contents.
	raw: String,

	/// # Original File Size.
	pub(super) size: u64,
}

impl<'a> TryFrom<&'a PathBuf> for ViewFile<'a> {
	type Error = VminlError;

	fn try_from(src: &'a PathBuf) -> Result<Self, Self::Error> {
		let raw = std::fs::read_to_string(src).map_err(|_| VminlError::Read)?;
		let size = u64::try_from(raw.len()).map_err(|_| VminlError::Read)?;
		if size == 0 {
			return Err(VminlError::EmptyFile);
		}

		Ok(Self { src, raw, size })
	}
}

impl ViewFile<'_> {
	/// # Minify!
	///
	/// Run the transformation pipeline over the contents and write the
	/// result back (atomically) if it actually changed anything.
	/// Returns the before/after sizes in bytes.
	///
	/// ## Errors
	///
	/// Returns an error if the minified copy cannot be saved.
	pub(super) fn minify(&mut self, features: &Features) -> Result<(u64, u64), VminlError> {
		let out = crate::pipeline::minify_html(&self.raw, features);

		// Save it if different!
		if ! out.is_empty() && out != self.raw {
			let new_len = out.len() as u64;
			write_atomic::write_file(self.src, out.as_bytes())
				.map_err(|_| VminlError::Write)?;
			return Ok((self.size, new_len));
		}

		// We didn't do anything.
		Ok((self.size, self.size))
	}
}



#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn t_roundtrip() {
		let dir = tempfile::tempdir().expect("Unable to create tempdir.");
		let path = dir.path().join("home.cshtml");
		std::fs::write(&path, "<div>  <b>Hi</b>  </div>\n").unwrap();

		let mut view = ViewFile::try_from(&path).unwrap();
		assert_eq!(view.size, 25);

		let (before, after) = view.minify(&Features::default()).unwrap();
		assert_eq!(before, 25);
		assert_eq!(after, 20);
		assert_eq!(
			std::fs::read_to_string(&path).unwrap(),
			"<div><b>Hi</b></div>",
		);
	}

	#[test]
	fn t_no_change() {
		let dir = tempfile::tempdir().expect("Unable to create tempdir.");
		let path = dir.path().join("tiny.html");
		std::fs::write(&path, "<p>ok</p>").unwrap();

		let mut view = ViewFile::try_from(&path).unwrap();
		let (before, after) = view.minify(&Features::default()).unwrap();
		assert_eq!(before, after);
		assert_eq!(std::fs::read_to_string(&path).unwrap(), "<p>ok</p>");
	}

	#[test]
	fn t_empty() {
		let dir = tempfile::tempdir().expect("Unable to create tempdir.");
		let path = dir.path().join("empty.html");
		std::fs::write(&path, "").unwrap();

		assert!(matches!(
			ViewFile::try_from(&path),
			Err(VminlError::EmptyFile),
		));
	}
}
