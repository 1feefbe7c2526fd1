pub mod brief;
pub mod editor;
pub mod help;

pub use brief::BriefView;
pub use editor::EditorView;
pub use help::HelpView;
