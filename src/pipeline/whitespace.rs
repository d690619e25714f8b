/*!
# `VMinL`: Whitespace
*/

use lazy_static::lazy_static;
use regex::Regex;



/// # Collapse Whitespace.
///
/// Three global passes, in order:
/// 1. any run of whitespace becomes a single space;
/// 2. whitespace hugging a line break becomes the line break alone;
/// 3. whitespace sitting between a closing `>` and an opening `<`
///    disappears, making adjacent tags contiguous.
///
/// Collapsing only; no space or newline is ever introduced where none
/// existed. Re-running this on its own output is a no-op.
pub(super) fn collapse(html: &str) -> String {
	lazy_static! {
		static ref RE_WS_RUN: Regex = Regex::new(r"\s+").unwrap();
		static ref RE_BREAK: Regex = Regex::new(r"\s*\n\s*").unwrap();
		static ref RE_TAG_GAP: Regex = Regex::new(r"\s*>\s*<\s*").unwrap();
	}

	let html = RE_WS_RUN.replace_all(html, " ");
	let html = RE_BREAK.replace_all(&html, "\n");
	RE_TAG_GAP.replace_all(&html, "><").into_owned()
}

/// # Doctype Fixup.
///
/// Whatever the earlier passes did around it, the first `>` in the
/// document (almost always the end of the doctype declaration) must
/// remain a literal `>`. A no-op in the common case, but kept as its
/// own separately testable stage.
pub(super) fn fix_doctype(html: &mut String) {
	if let Some(pos) = html.find('>') {
		html.remove(pos);
		html.insert(pos, '>');
	}
}



#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn t_collapse() {
		assert_eq!(
			collapse("<p>This     has \t multiple \r\n spaces</p>"),
			"<p>This has multiple spaces</p>",
		);

		assert_eq!(
			collapse("<div>  <span>  x  </span>  </div>"),
			"<div><span> x </span></div>",
		);

		// Text-side brackets are left alone.
		assert_eq!(collapse("a > b < c"), "a > b < c");
	}

	#[test]
	fn t_collapse_idempotent() {
		for raw in [
			"<div>  <span>  <b>Test</b>  </span>  </div>",
			"<p>one\r\n\ttwo</p>",
			"plain  text   here",
		] {
			let once = collapse(raw);
			assert_eq!(collapse(&once), once);
		}
	}

	#[test]
	fn t_fix_doctype() {
		let mut html = String::from("<!DOCTYPE html><html></html>");
		fix_doctype(&mut html);
		assert_eq!(html, "<!DOCTYPE html><html></html>");

		// No bracket, no panic.
		let mut html = String::from("no markup at all");
		fix_doctype(&mut html);
		assert_eq!(html, "no markup at all");
	}
}
