/// User interface module
///
/// Widgets here only read state and emit `Message`s:
/// - Navigation bar and footer (chrome.rs)
/// - Homepage sections (home.rs)
/// - Gallery grid, filter sidebar and chips (gallery.rs)
/// - Lightbox with info panel (modal.rs)

pub mod chrome;
pub mod gallery;
pub mod home;
pub mod modal;
