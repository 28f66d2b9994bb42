use crate::{cli::Command, framework::AppData};

mod account;
mod browse;
mod chapters;
mod config;
mod history;
mod manga;
mod read;

#[tracing::instrument(skip_all)]
pub async fn run(data: &AppData, command: Command) -> crate::Result<()> {
    match command {
        Command::Browse {
            query,
            order,
            page,
            lang,
        } => browse::browse(data, query, order, page, lang).await,
        Command::Manga { id } => manga::manga(data, &id).await,
        Command::Chapters {
            id,
            lang,
            search,
            group,
            order,
            page,
            page_size,
        } => {
            let options = chapters::Options {
                lang,
                search,
                group,
                order,
                page,
                page_size,
            };

            chapters::chapters(data, &id, options).await
        }
        Command::Read {
            chapter_id,
            data_saver,
        } => read::read(data, &chapter_id, data_saver).await,
        Command::History { remove, clear } => history::history(data, remove, clear).await,
        Command::Register {
            username,
            email,
            password,
        } => account::register(data, username, email, password).await,
        Command::Verify { email, otp } => account::verify(data, &email, &otp).await,
        Command::ResendOtp { email } => account::resend_otp(data, &email).await,
        Command::Login { email, password } => account::login(data, &email, &password).await,
        Command::Logout => account::logout(data).await,
        Command::Profile => account::profile(data).await,
        Command::Follow { manga_id } => account::follow(data, &manga_id).await,
        Command::Unfollow { manga_id } => account::unfollow(data, &manga_id).await,
        Command::Follows => account::follows(data).await,
        Command::ApplyTranslator {
            reason,
            languages,
            experience,
            portfolio_url,
        } => {
            let application = crate::account::TranslatorApplication {
                reason,
                languages,
                experience,
                portfolio_url,
            };

            account::apply_translator(data, &application).await
        }
        Command::Config => config::config(data),
    }
}
