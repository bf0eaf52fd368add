use std::sync::Arc;

use teloxide::macros::BotCommands;
use teloxide::prelude::*;

use crate::bot::state::{CourseDialogue, HandlerResult, State};
use crate::bot::{handlers, AppState};
use crate::format;

#[derive(BotCommands, Clone)]
#[command(rename_rule = "snake_case", description = "Comandos disponíveis:")]
pub enum Command {
    #[command(description = "mensagem inicial com os comandos")]
    Start,
    #[command(description = "listar todos os cursos")]
    ListarCursos,
    #[command(description = "consultar o link de um curso")]
    Curso(String),
    #[command(description = "adicionar um novo curso")]
    AdicionarCurso,
    #[command(description = "editar um curso")]
    EditarCurso,
    #[command(description = "apagar um curso")]
    ApagarCurso,
    #[command(description = "cancelar a operação")]
    Cancelar,
}

pub async fn handle_command(
    bot: Bot,
    dialogue: CourseDialogue,
    msg: Message,
    cmd: Command,
    app: Arc<AppState>,
) -> HandlerResult {
    match cmd {
        Command::Start => {
            bot.send_message(msg.chat.id, format::help_text()).await?;
        }

        Command::ListarCursos => {
            match handlers::list_courses(app.store.as_ref()).await {
                Ok(reply) => {
                    bot.send_message(msg.chat.id, reply).await?;
                }
                Err(e) => {
                    tracing::error!("store failure while listing courses: {e}");
                    bot.send_message(msg.chat.id, handlers::STORE_FAILURE).await?;
                }
            }
        }

        Command::Curso(arg) => {
            // Everything after the command, re-joined by single spaces, is
            // the lookup key.
            let name = arg.split_whitespace().collect::<Vec<_>>().join(" ");
            if name.is_empty() {
                bot.send_message(msg.chat.id, "❗ Uso: /curso <nome do curso>")
                    .await?;
            } else {
                match handlers::lookup_course(app.store.as_ref(), &name).await {
                    Ok(reply) => {
                        bot.send_message(msg.chat.id, reply).await?;
                    }
                    Err(e) => {
                        tracing::error!("store failure while looking up a course: {e}");
                        bot.send_message(msg.chat.id, handlers::STORE_FAILURE).await?;
                    }
                }
            }
        }

        Command::AdicionarCurso => {
            dialogue.update(State::AddName).await?;
            bot.send_message(msg.chat.id, handlers::ADD_NAME_PROMPT).await?;
        }

        Command::EditarCurso => {
            enter_if_not_empty(
                &bot,
                &dialogue,
                &msg,
                &app,
                State::EditName,
                handlers::EDIT_NAME_PROMPT,
            )
            .await?;
        }

        Command::ApagarCurso => {
            enter_if_not_empty(
                &bot,
                &dialogue,
                &msg,
                &app,
                State::DeleteName,
                handlers::DELETE_NAME_PROMPT,
            )
            .await?;
        }

        Command::Cancelar => {
            let active = !matches!(dialogue.get().await?, None | Some(State::Idle));
            if active {
                dialogue.exit().await?;
                bot.send_message(msg.chat.id, "🚫 Operação cancelada.").await?;
            } else {
                bot.send_message(msg.chat.id, "❗ Nenhuma operação em andamento.")
                    .await?;
            }
        }
    }

    Ok(())
}

/// Edit and delete refuse to enter their form while the catalog is empty.
async fn enter_if_not_empty(
    bot: &Bot,
    dialogue: &CourseDialogue,
    msg: &Message,
    app: &AppState,
    entry: State,
    prompt: &str,
) -> HandlerResult {
    match handlers::catalog_is_empty(app.store.as_ref()).await {
        Ok(true) => {
            bot.send_message(msg.chat.id, "❗ Nenhum curso cadastrado.").await?;
        }
        Ok(false) => {
            dialogue.update(entry).await?;
            bot.send_message(msg.chat.id, prompt).await?;
        }
        Err(e) => {
            tracing::error!("store failure while opening a form: {e}");
            bot.send_message(msg.chat.id, handlers::STORE_FAILURE).await?;
        }
    }
    Ok(())
}
