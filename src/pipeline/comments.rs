/*!
# `VMinL`: Markup Comments
*/



/// # Strip Markup Comments.
///
/// Remove every minimal `<!-- … -->` span, except:
/// 1. conditional comments (content begins with `[`);
/// 2. server includes (content begins with optional whitespace and a
///    literal `#include`);
/// 3. knockout binding comments, but only when `keep_knockout` is set
///    (content begins with `ko ` or is exactly `/ko`).
///
/// A comment with no closing `-->` is left untouched along with
/// everything after it; better a stray comment than a truncated
/// document.
pub(super) fn strip_markup_comments(html: &str, keep_knockout: bool) -> String {
	let mut out = String::with_capacity(html.len());
	let mut rest = html;

	while let Some(start) = rest.find("<!--") {
		let Some(len) = rest[start + 4..].find("-->") else { break };
		let body = &rest[start + 4..start + 4 + len];

		out.push_str(&rest[..start]);
		if keep_comment(body, keep_knockout) {
			out.push_str(&rest[start..start + 4 + len + 3]);
		}
		rest = &rest[start + 4 + len + 3..];
	}

	out.push_str(rest);
	out
}

/// # Is This Comment an Exception?
fn keep_comment(body: &str, keep_knockout: bool) -> bool {
	body.starts_with('[') ||
	body.trim_start().starts_with("#include") ||
	(keep_knockout && (body.starts_with("ko ") || body == "/ko"))
}
