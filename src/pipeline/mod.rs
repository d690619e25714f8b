/*!
# `VMinL`: Transformation Pipeline
*/

mod comments;
mod directives;
mod length;
pub(crate) mod scripts;
mod shield;
mod whitespace;

use crate::features::Features;
use shield::Shield;



/// # Minify a Document.
///
/// Run the full, strictly ordered sequence of content-preserving
/// rewrites over `raw` and return the minified text.
///
/// Every stage is a total function over the text: malformed input
/// (unterminated comments, blocks, tags) passes through the offending
/// stage untouched rather than being deleted or corrupted, so this
/// never panics and always returns a string.
pub(crate) fn minify_html(raw: &str, features: &Features) -> String {
	if raw.is_empty() { return String::new(); }

	// First Pass: strip single-line comments from script blocks, while
	// line boundaries still exist to delimit them.
	let mut html =
		if features.ignore_js_comments { raw.to_owned() }
		else { scripts::strip_script_comments(raw) };

	// Second Pass: shield the regions the global rewrites must not
	// touch: <pre> bodies and literal "/*" sequences.
	let mut shield = Shield::new();
	html = shield.protect(html);

	// Third Pass: collapse whitespace.
	html = whitespace::collapse(&html);

	// Fourth Pass: strip markup comments (with exceptions).
	if ! features.ignore_html_comments {
		html = comments::strip_markup_comments(&html, features.ignore_knockout_comments);
	}

	// Fifth Pass: make sure the doctype's closing bracket survived.
	whitespace::fix_doctype(&mut html);

	// Sixth Pass: put the shielded regions back, then trim the ends.
	let mut html = shield.restore(html).trim().to_owned();

	// Seventh Pass: cap the line lengths, if a cap was asked for.
	length::enforce_max_length(&mut html, features.max_line_length);

	// Final Pass: each template declaration onto its own line.
	directives::rearrange_declarations(&mut html);

	html
}
