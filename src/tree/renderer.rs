//! TreeRenderer - streams a branch-drawn tree to a colour-capable sink

use std::io::{self, Write};
use std::path::Path;

use termcolor::{Color, ColorSpec, NoColor, WriteColor};
use tracing::debug;

use super::config::RenderOptions;
use super::entry::{DirEntry, EntryKind, read_entries};
use super::filter::EntryFilter;
use super::icons::DIRECTORY_ICON;
use super::summary::Summary;

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const ERROR_ANNOTATION: &str = " [error opening dir]";

/// Renders directory trees with a fixed set of options.
///
/// Output is written line by line as the traversal proceeds, so memory use is
/// proportional to the depth of the tree rather than its size.
pub struct TreeRenderer {
    options: RenderOptions,
}

impl TreeRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render `root` into `out` and return the tally of this run alone.
    pub fn render<W: WriteColor>(&self, root: &Path, out: &mut W) -> io::Result<Summary> {
        let mut summary = Summary::new();
        self.render_into(root, &mut summary, out)?;
        Ok(summary)
    }

    /// Render `root` into `out`, accumulating counts into `summary`.
    ///
    /// The tally line printed at the end reflects everything `summary` holds,
    /// so reset it first for an independent run.
    pub fn render_into<W: WriteColor>(
        &self,
        root: &Path,
        summary: &mut Summary,
        out: &mut W,
    ) -> io::Result<()> {
        if self.options.max_depth == Some(0) {
            return Ok(());
        }

        write!(out, "{} ", DIRECTORY_ICON)?;
        out.set_color(&directory_color())?;
        write!(out, "{}", root.display())?;
        out.reset()?;

        if !self.render_dir(root, self.options.max_depth, "", summary, out)? {
            return Ok(());
        }

        writeln!(out)?;
        writeln!(out, "{}", summary.format_tally(self.options.directory_only))?;
        Ok(())
    }

    /// Render without colour into a string.
    pub fn render_to_string(&self, root: &Path) -> io::Result<(String, Summary)> {
        let mut out = NoColor::new(Vec::new());
        let summary = self.render(root, &mut out)?;
        let text = String::from_utf8_lossy(&out.into_inner()).into_owned();
        Ok((text, summary))
    }

    /// Finish the header line already written for `path`, then its children.
    ///
    /// Returns `false` when the directory could not be read; the annotation
    /// has been written in that case and nothing was counted for the subtree.
    fn render_dir<W: WriteColor>(
        &self,
        path: &Path,
        remaining: Option<usize>,
        prefix: &str,
        summary: &mut Summary,
        out: &mut W,
    ) -> io::Result<bool> {
        let entries = match read_entries(path) {
            Ok(entries) => entries,
            Err(e) => {
                debug!(error = %e, "skipping subtree");
                out.set_color(ColorSpec::new().set_fg(Some(Color::Red)))?;
                write!(out, "{}", ERROR_ANNOTATION)?;
                out.reset()?;
                writeln!(out)?;
                return Ok(false);
            }
        };
        writeln!(out)?;

        self.render_entries(path, entries, remaining, prefix, summary, out)?;
        Ok(true)
    }

    /// Filter the listing of `path` and write one line per visible entry,
    /// descending into subdirectories while depth allows.
    fn render_entries<W: WriteColor>(
        &self,
        path: &Path,
        entries: Vec<DirEntry>,
        remaining: Option<usize>,
        prefix: &str,
        summary: &mut Summary,
        out: &mut W,
    ) -> io::Result<()> {
        let entries = EntryFilter::from_options(&self.options).filter(entries);
        debug!(path = %path.display(), visible = entries.len(), "listing directory");

        let descend = remaining.is_none_or(|depth| depth > 1);
        let total = entries.len();

        for (i, entry) in entries.iter().enumerate() {
            let is_last = i + 1 == total;
            let branch = if is_last { LAST_BRANCH } else { BRANCH };

            summary.record(entry.kind);

            write!(out, "{}{}", prefix, branch)?;
            self.write_entry(path, entry, out)?;

            if entry.is_dir() && descend {
                let child_prefix = child_prefix(prefix, is_last);
                self.render_dir(
                    &path.join(&entry.name),
                    remaining.map(|depth| depth - 1),
                    &child_prefix,
                    summary,
                    out,
                )?;
            } else {
                writeln!(out)?;
            }
        }

        Ok(())
    }

    /// Write `icon name`, with ` -> target` for symlinks, without a newline.
    fn write_entry<W: WriteColor>(
        &self,
        parent: &Path,
        entry: &DirEntry,
        out: &mut W,
    ) -> io::Result<()> {
        match entry.kind {
            EntryKind::Directory => {
                write!(out, "{} ", DIRECTORY_ICON)?;
                out.set_color(&directory_color())?;
                write!(out, "{}", entry.name)?;
                out.reset()?;
            }
            EntryKind::File => {
                write!(out, "{} {}", self.options.icons.icon_for(&entry.name), entry.name)?;
            }
            EntryKind::Symlink => {
                write!(out, "{} ", self.options.icons.icon_for(&entry.name))?;
                out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
                write!(out, "{}", entry.name)?;
                out.reset()?;
                match entry.link_target(parent) {
                    Ok(target) => write!(out, " -> {}", target)?,
                    Err(e) => debug!(error = %e, "showing link without target"),
                }
            }
        }
        Ok(())
    }
}

/// Prefix handed to the children of an entry: the parent's prefix, a bar for
/// non-last siblings (nothing for the last, so no line dangles), then three
/// spaces.
fn child_prefix(prefix: &str, is_last: bool) -> String {
    if is_last {
        format!("{}   ", prefix)
    } else {
        format!("{}│   ", prefix)
    }
}

fn directory_color() -> ColorSpec {
    let mut spec = ColorSpec::new();
    spec.set_fg(Some(Color::Blue)).set_bold(true);
    spec
}
