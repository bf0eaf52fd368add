use std::sync::Arc;

use teloxide::prelude::*;

use crate::bot::state::{CourseDialogue, HandlerResult, State};
use crate::bot::AppState;
use crate::catalog::{normalize_name, Area, Course, Field};
use crate::format;
use crate::store::{CourseStore, StoreError};

pub(crate) const ADD_NAME_PROMPT: &str = "🔹 Qual é o nome do curso que deseja adicionar?";
pub(crate) const EDIT_NAME_PROMPT: &str = "🔹 Qual curso você deseja editar?";
pub(crate) const DELETE_NAME_PROMPT: &str = "🔹 Qual curso você deseja apagar?";

const AREA_PROMPT: &str = "🔹 Qual é a área do curso? Digite uma das opções:\n\
                           humanas, matematica, ciencias da natureza, redacao, linguagens";
const LINK_PROMPT: &str = "🔹 Agora, envie o link do curso:";
const FIELD_PROMPT: &str = "🔹 O que deseja alterar? Digite 'nome' ou 'link':";
const NEW_NAME_PROMPT: &str = "🔹 Envie o novo nome do curso:";
const NEW_LINK_PROMPT: &str = "🔹 Envie o novo link do curso:";

pub(crate) const STORE_FAILURE: &str =
    "⚠️ Falha ao acessar o catálogo de cursos. Tente novamente mais tarde.";

/// Feed a plain message into whatever form is active. Idle dialogues ignore
/// it, which also swallows unknown commands.
pub async fn handle_step(
    bot: Bot,
    dialogue: CourseDialogue,
    state: State,
    msg: Message,
    app: Arc<AppState>,
) -> HandlerResult {
    // Non-text updates (stickers, photos) keep the current state.
    let Some(text) = msg.text().map(str::to_owned) else {
        return Ok(());
    };
    let text = text.as_str();

    match state {
        State::Idle => Ok(()),
        State::AddName => step_add_name(bot, dialogue, msg, text).await,
        State::AddArea { name } => step_add_area(bot, dialogue, msg, text, name).await,
        State::AddLink { name, area } => {
            step_add_link(bot, dialogue, msg, app, text, name, area).await
        }
        State::EditName => step_edit_name(bot, dialogue, msg, app, text).await,
        State::EditField { name } => step_edit_field(bot, dialogue, msg, text, name).await,
        State::EditValue { name, field } => {
            step_edit_value(bot, dialogue, msg, app, text, name, field).await
        }
        State::DeleteName => step_delete_name(bot, dialogue, msg, app, text).await,
    }
}

// ── Add form ───────────────────────────────────────────────────────

async fn step_add_name(
    bot: Bot,
    dialogue: CourseDialogue,
    msg: Message,
    text: &str,
) -> HandlerResult {
    match normalize_name(text) {
        Some(name) => {
            dialogue.update(State::AddArea { name }).await?;
            bot.send_message(msg.chat.id, AREA_PROMPT).await?;
        }
        None => {
            bot.send_message(msg.chat.id, "❗ Nome inválido. Tente novamente.")
                .await?;
        }
    }
    Ok(())
}

async fn step_add_area(
    bot: Bot,
    dialogue: CourseDialogue,
    msg: Message,
    text: &str,
    name: String,
) -> HandlerResult {
    match Area::parse(text) {
        Some(area) => {
            dialogue.update(State::AddLink { name, area }).await?;
            bot.send_message(msg.chat.id, LINK_PROMPT).await?;
        }
        None => {
            bot.send_message(msg.chat.id, "❗ Área inválida. Tente novamente.")
                .await?;
        }
    }
    Ok(())
}

async fn step_add_link(
    bot: Bot,
    dialogue: CourseDialogue,
    msg: Message,
    app: Arc<AppState>,
    text: &str,
    name: String,
    area: Area,
) -> HandlerResult {
    match commit_add(app.store.as_ref(), &name, area, text.trim()).await {
        Ok(reply) => {
            bot.send_message(msg.chat.id, reply).await?;
        }
        Err(e) => {
            tracing::error!("store failure while adding course '{name}': {e}");
            bot.send_message(msg.chat.id, STORE_FAILURE).await?;
        }
    }
    dialogue.exit().await?;
    Ok(())
}

// ── Edit form ──────────────────────────────────────────────────────

async fn step_edit_name(
    bot: Bot,
    dialogue: CourseDialogue,
    msg: Message,
    app: Arc<AppState>,
    text: &str,
) -> HandlerResult {
    let name = text.trim().to_string();
    match course_exists(app.store.as_ref(), &name).await {
        Ok(true) => {
            dialogue.update(State::EditField { name }).await?;
            bot.send_message(msg.chat.id, FIELD_PROMPT).await?;
        }
        // Unknown name ends the form, no re-prompt.
        Ok(false) => {
            bot.send_message(msg.chat.id, format!("❗ Curso '{name}' não encontrado."))
                .await?;
            dialogue.exit().await?;
        }
        Err(e) => {
            tracing::error!("store failure while checking course '{name}': {e}");
            bot.send_message(msg.chat.id, STORE_FAILURE).await?;
            dialogue.exit().await?;
        }
    }
    Ok(())
}

async fn step_edit_field(
    bot: Bot,
    dialogue: CourseDialogue,
    msg: Message,
    text: &str,
    name: String,
) -> HandlerResult {
    match Field::parse(text) {
        Some(field) => {
            let prompt = match field {
                Field::Nome => NEW_NAME_PROMPT,
                Field::Link => NEW_LINK_PROMPT,
            };
            dialogue.update(State::EditValue { name, field }).await?;
            bot.send_message(msg.chat.id, prompt).await?;
        }
        None => {
            bot.send_message(msg.chat.id, "❗ Campo inválido. Digite 'nome' ou 'link'.")
                .await?;
        }
    }
    Ok(())
}

async fn step_edit_value(
    bot: Bot,
    dialogue: CourseDialogue,
    msg: Message,
    app: Arc<AppState>,
    text: &str,
    name: String,
    field: Field,
) -> HandlerResult {
    // A rename must still produce a valid course name.
    let value = if field == Field::Nome {
        match normalize_name(text) {
            Some(v) => v,
            None => {
                bot.send_message(msg.chat.id, "❗ Nome inválido. Tente novamente.")
                    .await?;
                return Ok(());
            }
        }
    } else {
        text.trim().to_string()
    };

    match commit_edit(app.store.as_ref(), &name, field, &value).await {
        Ok(reply) => {
            bot.send_message(msg.chat.id, reply).await?;
        }
        Err(e) => {
            tracing::error!("store failure while editing course '{name}': {e}");
            bot.send_message(msg.chat.id, STORE_FAILURE).await?;
        }
    }
    dialogue.exit().await?;
    Ok(())
}

// ── Delete form ────────────────────────────────────────────────────

async fn step_delete_name(
    bot: Bot,
    dialogue: CourseDialogue,
    msg: Message,
    app: Arc<AppState>,
    text: &str,
) -> HandlerResult {
    let name = text.trim().to_string();
    match commit_delete(app.store.as_ref(), &name).await {
        Ok(reply) => {
            bot.send_message(msg.chat.id, reply).await?;
            // The form ends either way; re-show the command list.
            bot.send_message(msg.chat.id, format::help_text()).await?;
        }
        Err(e) => {
            tracing::error!("store failure while deleting course '{name}': {e}");
            bot.send_message(msg.chat.id, STORE_FAILURE).await?;
        }
    }
    dialogue.exit().await?;
    Ok(())
}

// ── Catalog operations ─────────────────────────────────────────────
//
// Every mutation re-loads the full catalog, changes the map in memory and
// saves it back. Last write wins under concurrent edits.

pub(crate) async fn catalog_is_empty(store: &dyn CourseStore) -> Result<bool, StoreError> {
    Ok(store.load_all().await?.is_empty())
}

pub(crate) async fn course_exists(
    store: &dyn CourseStore,
    name: &str,
) -> Result<bool, StoreError> {
    Ok(store.load_all().await?.contains_key(name))
}

pub(crate) async fn list_courses(store: &dyn CourseStore) -> Result<String, StoreError> {
    let catalog = store.load_all().await?;
    if catalog.is_empty() {
        Ok("❗ Nenhum curso cadastrado.".to_string())
    } else {
        Ok(format::render_catalog(&catalog))
    }
}

pub(crate) async fn lookup_course(
    store: &dyn CourseStore,
    name: &str,
) -> Result<String, StoreError> {
    let catalog = store.load_all().await?;
    Ok(match catalog.get(name) {
        Some(course) => format::render_course(name, course),
        None => format!("❗ Curso '{name}' não encontrado."),
    })
}

/// Adding under an existing name silently replaces the record.
pub(crate) async fn commit_add(
    store: &dyn CourseStore,
    name: &str,
    area: Area,
    link: &str,
) -> Result<String, StoreError> {
    let mut catalog = store.load_all().await?;
    catalog.insert(
        name.to_string(),
        Course {
            area,
            link: link.to_string(),
        },
    );
    store.save_all(&catalog).await?;
    Ok(format!(
        "✅ Curso '{name}' da área '{}' adicionado com sucesso!\n\
         Use /listar_cursos para ver os cursos.",
        area.as_str()
    ))
}

/// Renaming moves the record to the new key, keeping area and link; a
/// colliding name is silently overwritten.
pub(crate) async fn commit_edit(
    store: &dyn CourseStore,
    name: &str,
    field: Field,
    value: &str,
) -> Result<String, StoreError> {
    let mut catalog = store.load_all().await?;
    let reply = match field {
        Field::Nome => match catalog.remove(name) {
            Some(course) => {
                catalog.insert(value.to_string(), course);
                store.save_all(&catalog).await?;
                format!("✅ Curso '{value}' atualizado com sucesso!")
            }
            None => format!("❗ Curso '{name}' não encontrado."),
        },
        Field::Link => match catalog.get_mut(name) {
            Some(course) => {
                course.link = value.to_string();
                store.save_all(&catalog).await?;
                format!("✅ Curso '{name}' atualizado com sucesso!")
            }
            None => format!("❗ Curso '{name}' não encontrado."),
        },
    };
    Ok(reply)
}

pub(crate) async fn commit_delete(
    store: &dyn CourseStore,
    name: &str,
) -> Result<String, StoreError> {
    let mut catalog = store.load_all().await?;
    let reply = if catalog.remove(name).is_some() {
        store.save_all(&catalog).await?;
        format!("🗑 Curso '{name}' apagado com sucesso!")
    } else {
        format!("❗ Curso '{name}' não encontrado.")
    };
    Ok(reply)
}
