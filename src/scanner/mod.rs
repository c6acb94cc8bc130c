/*!
 * The matching core of the scanner.
 *
 * - `terms`: stemmed search-term sets, built once at startup
 * - `fuzzy`: Levenshtein-based similarity ratio on the 0-100 scale
 * - `window`: threshold-gated window scoring and track traversal
 */

pub mod fuzzy;
pub mod terms;
pub mod window;

pub use terms::{TermRegistry, TermSet};
pub use window::{TrackTraverser, WindowMatch, WindowScorer};
