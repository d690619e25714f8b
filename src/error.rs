/*!
# `VMinL`: Errors
*/

use std::fmt;



#[derive(Debug, Copy, Clone)]
/// # Generic (Per-File) Error.
///
/// None of these abort the batch; the worker loop drops them and moves
/// on to the next document.
pub(crate) enum VminlError {
	/// # Empty File.
	EmptyFile,

	/// # Unreadable File.
	Read,

	/// # Failed Save.
	Write,
}

impl AsRef<str> for VminlError {
	#[inline]
	fn as_ref(&self) -> &str { self.as_str() }
}

impl fmt::Display for VminlError {
	#[inline]
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl std::error::Error for VminlError {}

impl VminlError {
	/// # As Str.
	pub(crate) const fn as_str(self) -> &'static str {
		match self {
			Self::EmptyFile => "The file is empty.",
			Self::Read => "Unable to read the file.",
			Self::Write => "Unable to save the changes.",
		}
	}
}
