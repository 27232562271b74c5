//! Core library for `vpnkey`.
//!
//! Renders the VPN onboarding page: the access key with its QR code and the
//! install steps for two clients, in Russian or English. Rendering is a set
//! of pure functions over [`state::PageState`]; the only stateful piece is
//! the copy button's feedback timer in [`copy`].

pub mod assets;
pub mod copy;
pub mod error;
pub mod html;
pub mod i18n;
pub mod page;
pub mod qr;
pub mod state;
pub mod view;

pub use copy::{COPY_FEEDBACK, Clipboard, CopyButton, CopyTarget, MemoryClipboard};
pub use error::{ClipboardError, ParseError, RenderError};
pub use i18n::{Lang, Slot, translate};
pub use page::{PageAssets, render_page};
pub use state::{Defaults, Event, PageQuery, PageState};
pub use view::{Device, Tab, render_steps};
