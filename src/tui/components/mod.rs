// Component library exports

pub mod app;
pub mod status_bar;
pub mod value_editor;

pub use app::{App, AppProps, EditorView};
pub use status_bar::StatusBar;
pub use value_editor::{
    BoundedValueEditor, ChangeHandler, EditorFocus, EditorMsg, EditorProps, EditorState,
};
