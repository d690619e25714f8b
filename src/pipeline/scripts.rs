/*!
# `VMinL`: Script Comments
*/

use lazy_static::lazy_static;
use regex::Regex;



/// # Strip Script Line Comments.
///
/// Remove `//` comments, through end-of-line, from the contents of
/// every `<script>` block. A `//` immediately preceded by a colon or
/// quote is assumed to be part of a URL or string literal and left
/// alone. That check is a heuristic, not a tokenizer; it can both
/// over- and under-strip on pathological script content.
///
/// Text outside script elements (including each script's own opening
/// tag) is never touched. Stateless, and independently callable.
pub(crate) fn strip_script_comments(html: &str) -> String {
	lazy_static! {
		static ref RE_SCRIPT: Regex = Regex::new(r"(?is)(<script[^>]*>)(.*?)(</script>)").unwrap();
		static ref RE_LINE_COMMENT: Regex = Regex::new(r#"(^|[^:"'])//[^\n]*"#).unwrap();
	}

	let mut out = String::with_capacity(html.len());
	let mut last = 0;

	for caps in RE_SCRIPT.captures_iter(html) {
		let all = caps.get(0).unwrap();
		out.push_str(&html[last..all.start()]);
		out.push_str(&caps[1]);
		out.push_str(&RE_LINE_COMMENT.replace_all(&caps[2], "$1"));
		out.push_str(&caps[3]);
		last = all.end();
	}

	out.push_str(&html[last..]);
	out
}



#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn t_strip() {
		// The character before each comment (a space, here) survives.
		assert_eq!(
			strip_script_comments("<script>\nvar a = 1; // one\nvar b = 2; // two\n</script>"),
			"<script>\nvar a = 1; \nvar b = 2; \n</script>",
		);

		// A comment opening the block, and one on the final line with
		// no trailing newline, both go.
		assert_eq!(
			strip_script_comments("<script>// top\nvar a; // tail</script>"),
			"<script>\nvar a; </script>",
		);
	}

	#[test]
	fn t_heuristics() {
		// URLs and quoted slashes survive.
		for raw in [
			"<script>var u = 'https://x.io/a';\n</script>",
			"<script>var v = \"//host/path\";\n</script>",
			"<script>go('//cdn.example.com');\n</script>",
		] {
			assert_eq!(strip_script_comments(raw), raw);
		}

		// A real comment after a protected URL still goes.
		assert_eq!(
			strip_script_comments("<script>var u = 'https://x.io'; // nav\n</script>"),
			"<script>var u = 'https://x.io'; \n</script>",
		);
	}

	#[test]
	fn t_outside_untouched() {
		// Slashes in markup and attributes are none of our business.
		for raw in [
			"<p>progress: 4 // 10</p>",
			"<script src=\"//cdn.example.com/app.js\"></script>",
			"<a href=\"//example.com\">x</a>",
		] {
			assert_eq!(strip_script_comments(raw), raw);
		}
	}

	#[test]
	fn t_multiple_blocks() {
		assert_eq!(
			strip_script_comments("<script>a(); // x\n</script><p>keep // this</p><script>b(); // y\n</script>"),
			"<script>a(); \n</script><p>keep // this</p><script>b(); \n</script>",
		);
	}
}
