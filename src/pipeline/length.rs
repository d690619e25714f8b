/*!
# `VMinL`: Line Lengths
*/



/// # Enforce a Maximum Line Length.
///
/// Some downstream consumers choke on extremely long lines, so when a
/// cap is configured (`max > 0`), walk a threshold through the
/// document and break the line at the last `><` tag boundary at or
/// before it.
///
/// A break only ever lands between a `>` and a `<`; when no such
/// boundary exists this side of the threshold, the line is simply left
/// long. (Both sides of the split are ASCII, so the insertion point is
/// always a valid character boundary.)
pub(super) fn enforce_max_length(html: &mut String, max: usize) {
	if max == 0 { return; }

	let mut limit = max;
	while html.len() > limit {
		// The pair may straddle the threshold, so the window runs one
		// byte past it.
		let window = (limit + 2).min(html.len());
		if let Some(pos) = html.as_bytes()[..window].windows(2).rposition(|w| w == b"><") {
			// Inserting the break splits the pair, so the same spot
			// can never be picked twice.
			html.insert(pos + 1, '\n');
		}

		limit += max;
	}
}



#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn t_unlimited() {
		let mut html = "<b>x</b>".repeat(100);
		let before = html.clone();
		enforce_max_length(&mut html, 0);
		assert_eq!(html, before);
	}

	#[test]
	fn t_break_at_boundary() {
		let mut html = String::from("<b>x</b><i>y</i><u>z</u>");
		enforce_max_length(&mut html, 10);
		assert_eq!(html, "<b>x</b>\n<i>y</i>\n<u>z</u>");
	}

	#[test]
	fn t_no_boundary() {
		// One long text run: nowhere safe to break, so don't.
		let mut html = String::from("<p>aaaaaaaaaaaaaaaaaaaaaaaaaaaaaa</p>");
		enforce_max_length(&mut html, 10);
		assert_eq!(html, "<p>aaaaaaaaaaaaaaaaaaaaaaaaaaaaaa</p>");
	}

	#[test]
	fn t_short_enough() {
		let mut html = String::from("<p>tiny</p>");
		enforce_max_length(&mut html, 100);
		assert_eq!(html, "<p>tiny</p>");
	}
}
