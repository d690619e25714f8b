//!
//! # `VMinL`
//!
//! `VMinL` is a fast, in-place minifier for HTML and server-template view
//! files, the sort of `.cshtml`/`.aspx`/`.html` sources a build pipeline
//! wants squished before deployment. It prioritizes safety and code sanity
//! over _ULTIMATE COMPRESSION_: the transformations are purely textual and
//! deliberately conservative, so template directives, conditional comments,
//! server includes, and preformatted content all come out the other side
//! intact.
//!
//! Unlike DOM-based minifiers, `VMinL` never parses the document into a
//! tree; view files are full of template syntax that no HTML parser should
//! be trusted with. Instead it runs an ordered sequence of
//! content-preserving rewrites over the raw text, shielding the regions
//! whose bytes must survive untouched.
//!
//!
//!
//! ## Use
//!
//! For basic use, just toss one or more file or directory paths after the
//! command, like:
//! ```bash
//! # Crunch one file.
//! vminl /path/to/one.cshtml
//!
//! # Recursively crunch every view file in a directory.
//! vminl /path/to
//!
//! # Do the same thing but with a progress bar.
//! vminl -p /path/to
//!
//! # For a full list of options, run help:
//! vminl -h
//! ```
//!
//!
//!
//! ## Minification
//!
//! Size savings come from:
//! * Collapsing whitespace runs to a single space;
//! * Deleting whitespace sandwiched between adjacent tags;
//! * Stripping HTML comments (except conditional comments, server
//!   includes, and optionally knockout binding comments);
//! * Stripping single-line `//` comments from inline script blocks;
//!
//! while the following are never altered:
//! * The contents of `<pre>` blocks, byte for byte;
//! * Literal `/*` sequences (and so CSS/JS block comments);
//! * The document's doctype declaration.
//!
//! Template declarations (`@model`, `@using`, `@inherits`) are
//! repositioned after minification so each sits on its own line (the
//! template engine chokes otherwise), with `@model` hoisted to the very
//! top of the document.
//!
//!
//!
//! ## Caution
//!
//! * Documents are expected to be encoded in UTF-8.
//! * The transformations are textual, not syntactic. Pathological markup
//!   (stray `<`/`>` in text nodes, unquoted attribute values with spaces)
//!   may lose or keep a byte it shouldn't. Unterminated comments and
//!   blocks are always left as-was rather than guessed at.
//!

#![warn(clippy::filetype_is_file)]
#![warn(clippy::integer_division)]
#![warn(clippy::needless_borrow)]
#![warn(clippy::perf)]
#![warn(clippy::suboptimal_flops)]
#![warn(clippy::unneeded_field_pattern)]
#![warn(macro_use_extern_crate)]
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(non_ascii_idents)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_extern_crates)]
#![warn(unused_import_braces)]

#![allow(clippy::module_name_repetitions)]



mod error;
mod features;
mod minify;
mod pipeline;



use argyle::{
	Argue,
	ArgyleError,
	FLAG_HELP,
	FLAG_REQUIRED,
	FLAG_VERSION,
};
use dowser::{
	Dowser,
	utility::du,
};
use features::Features;
use fyi_msg::{
	BeforeAfter,
	Msg,
	MsgKind,
	Progless,
};
use minify::ViewFile;
use rayon::iter::{
	IntoParallelRefIterator,
	ParallelIterator,
};
use std::{
	ffi::OsStr,
	os::unix::ffi::OsStrExt,
	path::{
		Path,
		PathBuf,
	},
};



/// Main.
fn main() {
	match _main() {
		Ok(_) => {},
		Err(ArgyleError::WantsVersion) => {
			println!(concat!("VMinL v", env!("CARGO_PKG_VERSION")));
		},
		Err(ArgyleError::WantsHelp) => {
			helper();
		},
		Err(e) => {
			Msg::error(e).die(1);
		},
	}
}

#[inline]
/// Actual Main.
fn _main() -> Result<(), ArgyleError> {
	// Parse CLI arguments.
	let args = Argue::new(FLAG_HELP | FLAG_REQUIRED | FLAG_VERSION)?
		.with_list();

	// Which optional behaviors are off for this run? Built once; every
	// worker borrows it.
	let features = Features {
		ignore_html_comments: args.switch(b"--ignore-html-comments"),
		ignore_js_comments: args.switch(b"--ignore-js-comments"),
		ignore_knockout_comments: args.switch(b"--ignore-knockout-comments"),
		max_line_length: max_line_length(&args),
	};

	// Put it all together!
	let paths = Vec::<PathBuf>::try_from(
		Dowser::filtered(|p: &Path| is_view_file(p))
			.with_paths(args.args().iter().map(|x| OsStr::from_bytes(x.as_ref())))
	).map_err(|_| ArgyleError::Custom("No view files were found."))?;

	// Sexy run-through.
	if args.switch2(b"-p", b"--progress") {
		// Boot up a progress bar.
		let progress = Progless::try_from(paths.len())
			.map_err(|_| ArgyleError::Custom("Progress can only be displayed for up to 4,294,967,295 files. Try again with fewer files or without the -p/--progress flag."))?
			.with_title(Some(Msg::custom("VMinL", 199, "Reticulating &views;")));

		// Check file sizes before we start.
		let mut ba = BeforeAfter::start(du(&paths));

		// Process!
		paths.par_iter().for_each(|x| {
			let tmp = x.to_string_lossy();
			progress.add(&tmp);
			minify_file(x, &features);
			progress.remove(&tmp);
		});

		// Check file sizes again.
		ba.stop(du(&paths));

		// Finish up.
		progress.finish();
		progress.summary(MsgKind::Crunched, "view", "views")
			.with_bytes_saved(ba.less(), ba.less_percent())
			.print();
	}
	else {
		paths.par_iter().for_each(|x| {
			minify_file(x, &features);
		});
	}

	Ok(())
}

/// Do the dirty work!
///
/// Errors are per-file; an unreadable or empty document is simply
/// skipped so the rest of the batch can carry on.
fn minify_file(path: &PathBuf, features: &Features) {
	let _res = ViewFile::try_from(path).and_then(|mut v| v.minify(features));
}

/// # Is View File?
///
/// The eight recognized view/markup suffixes, compared byte-wise and
/// case-insensitively. Only the final extension counts, so
/// `codes.js.aspx` qualifies while `codes.aspx.js` does not.
fn is_view_file(path: &Path) -> bool {
	path.extension().map_or(
		false,
		|e| {
			let ext = e.as_bytes().to_ascii_lowercase();
			matches!(
				ext.as_slice(),
				b"cshtml" | b"vbhtml" | b"aspx" | b"html" | b"htm" | b"ascx" | b"master" | b"inc"
			)
		}
	)
}

/// # Max Line Length.
///
/// An optional bare numeric argument caps output line length; zero,
/// the default, means no limit. (Numbers make lousy file names, so
/// this cannot collide with the trailing paths.)
fn max_line_length(args: &Argue) -> usize {
	args.args()
		.iter()
		.filter_map(|x| std::str::from_utf8(x.as_ref()).ok())
		.find_map(|x| x.parse::<usize>().ok())
		.unwrap_or(0)
}

#[cold]
/// Print Help.
fn helper() {
	println!(concat!(
		r"
     __,---.__
  ,-'         `-.__
&/           `._\ _\
/               ''._    ", "\x1b[38;5;199mVMinL\x1b[0;38;5;69m v", env!("CARGO_PKG_VERSION"), "\x1b[0m", r"
|   ,             (∞)   Fast, safe, in-place
|__,'`-..--|__|--''     view minification.

USAGE:
    vminl [FLAGS] [OPTIONS] <PATH(S)>...

FLAGS:
        --ignore-html-comments      Leave markup comments in place.
        --ignore-js-comments        Leave script line comments in place.
        --ignore-knockout-comments  Preserve knockout binding comments.
    -h, --help                      Prints help information.
    -p, --progress                  Show progress bar while minifying.
    -V, --version                   Prints version information.

OPTIONS:
    -l, --list <list>    Read file paths from this list.

ARGS:
    <LENGTH>        Optional maximum output line length, in bytes.
    <PATH(S)>...    One or more files or directories to compress.
"
	));
}



#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn t_view_extensions() {
		for ok in ["test.html", "codes.js.aspx", "test.inc", "a/b/INDEX.HTM", "x.Master", "v.cshtml", "v.vbhtml", "c.ascx"] {
			assert!(is_view_file(Path::new(ok)), "{} should match", ok);
		}

		for bad in ["codes.aspx.js", "aspx.codes.js", "style.css", "html", "page.html.bak"] {
			assert!(! is_view_file(Path::new(bad)), "{} should not match", bad);
		}
	}
}
