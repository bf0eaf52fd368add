use teloxide::dispatching::dialogue::InMemStorage;
use teloxide::prelude::Dialogue;

use crate::catalog::{Area, Field};

pub type CourseDialogue = Dialogue<State, InMemStorage<State>>;
pub type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

/// Per-chat conversation state. Each mutating command walks one of three
/// linear forms; every other update finds the dialogue in `Idle`.
#[derive(Clone, Default)]
pub enum State {
    #[default]
    Idle,

    // /adicionar_curso
    AddName,
    AddArea {
        name: String,
    },
    AddLink {
        name: String,
        area: Area,
    },

    // /editar_curso
    EditName,
    EditField {
        name: String,
    },
    EditValue {
        name: String,
        field: Field,
    },

    // /apagar_curso
    DeleteName,
}
