//! # Presentation Layer
//!
//! Turns content from `qshowcase_content` into terminal output. It follows an
//! adaptation of the **MVVM (Model-View-ViewModel)** pattern, with stateful
//! components for the interactive browser.
//!
//! ## Data Flow
//!
//! ### Console output (text / JSON)
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] ==(JSON)==> serde_json --> stdout
//!                                                                 ==(Text)==> [ View ] --> stdout
//! ```
//!
//! ### Interactive browser
//!
//! ```text
//! [ Handler ] --> [ TuiRenderer (Router) ] --(Select topic)--> [ Presenter ] --> [ PageViewModel ]
//!                        |                                                            |
//!                        v                                                            v
//!               [ SidebarComponent ] <-- keys                              [ ContentComponent ]
//! ```
//!
//! ## Rules
//!
//! 1. **ViewModels hold data, not layout.** Markup such as `**bold**` is kept
//!    verbatim; views decide whether to style or keep it.
//! 2. **JSON is always the full page.** `ViewMode` only changes text output.
//! 3. **Components own UI state.** Selection and scroll offsets live in
//!    `views/tui/components`, never in a ViewModel.
//!
//! ## Directory Guide
//!
//! | If you need to... | Go to... |
//! |-------------------|----------|
//! | Add a field to the JSON output | `view_models/` |
//! | Change how a `Section` becomes a ViewModel | `presenters/` |
//! | Change indentation or colors of the page | `views/` |
//! | Parse inline markup, draw rules | `formatters/` |
//! | Handle a key in the browser | `views/tui/components/` |
//! | Switch between text and JSON | `renderers/` |

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer, TuiRenderer};
pub use view_models::{CommandResultViewModel, CreateView, DisplayOptions, Guidance, ViewMode};
