// Resume actions: save/get of the single resume document, AI improvement of a
// text fragment, and the editor page props.

pub mod handlers;
pub mod improve;
pub mod prompts;
pub mod service;

/// Page path whose view goes stale when a resume is saved.
pub const RESUME_PAGE_PATH: &str = "/resume";
