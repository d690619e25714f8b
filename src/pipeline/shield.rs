/*!
# `VMinL`: Shielded Regions
*/

use lazy_static::lazy_static;
use regex::Regex;



/// # Stand-In for Literal `/*`.
///
/// One shared token is enough here; restoration is a literal substring
/// replace, not an ordered unwind.
const SLASH_STAR: &str = "*vSLASHSTAR*";



#[derive(Debug, Default)]
/// # Placeholder Map.
///
/// Short-lived substitution table protecting substrings from the
/// global rewrites: each `<pre>` block is swapped for a unique token,
/// and every literal `/*` for a shared one, then both are swapped back
/// once the rewrites have run.
///
/// Each pipeline invocation owns its own map, so nothing leaks across
/// calls (or threads).
pub(super) struct Shield {
	/// # Token/Original Pairs, In Document Order.
	entries: Vec<(String, String)>,
}

impl Shield {
	/// # New (Empty) Map.
	pub(super) fn new() -> Self { Self::default() }

	/// # Protect.
	///
	/// Swap out every preformatted block (opening tag through matching
	/// closing tag, first-to-last) and every literal `/*`. A `<pre>`
	/// with no closing tag is left unmatched and takes its chances
	/// with the rewrites like any other markup.
	pub(super) fn protect(&mut self, html: String) -> String {
		lazy_static! {
			// Case/attribute-agnostic on the opening tag; non-greedy
			// through the nearest closer.
			static ref RE_PRE: Regex = Regex::new(r"(?is)<pre(?:\s[^>]*)?>.*?</pre>").unwrap();
		}

		let mut out = String::with_capacity(html.len());
		let mut last = 0;
		for m in RE_PRE.find_iter(&html) {
			let token = format!("*vPRE{}*", self.entries.len());
			out.push_str(&html[last..m.start()]);
			out.push_str(&token);
			self.entries.push((token, m.as_str().to_owned()));
			last = m.end();
		}
		out.push_str(&html[last..]);

		out.replace("/*", SLASH_STAR)
	}

	/// # Restore.
	///
	/// Put the protected substrings back, byte for byte. Block tokens
	/// are unique, so a single replacement each suffices; the
	/// slash-star token is swapped globally.
	pub(super) fn restore(&self, html: String) -> String {
		let mut out = html.replace(SLASH_STAR, "/*");
		for (token, original) in self.entries.iter().rev() {
			out = out.replacen(token.as_str(), original, 1);
		}
		out
	}
}
