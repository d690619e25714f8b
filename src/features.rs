/*!
# `VMinL`: Features
*/



#[derive(Debug, Clone, Copy, Default)]
/// # Run Configuration.
///
/// Which optional pipeline behaviors are disabled, plus the maximum
/// output line length. Built once from the CLI arguments and shared
/// (read-only) across all workers, so concurrent runs can never step
/// on each other's toes.
pub(crate) struct Features {
	/// # Leave Markup Comments Alone?
	pub(crate) ignore_html_comments: bool,

	/// # Leave Script Line Comments Alone?
	pub(crate) ignore_js_comments: bool,

	/// # Preserve Knockout Binding Comments?
	///
	/// When set, `<!--ko …-->`/`<!--/ko-->` spans survive comment
	/// stripping; otherwise they're removed like any other comment.
	pub(crate) ignore_knockout_comments: bool,

	/// # Maximum Output Line Length (Bytes).
	///
	/// Zero means unlimited.
	pub(crate) max_line_length: usize,
}



#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn t_defaults() {
		let features = Features::default();
		assert!(! features.ignore_html_comments);
		assert!(! features.ignore_js_comments);
		assert!(! features.ignore_knockout_comments);
		assert_eq!(features.max_line_length, 0);
	}
}
