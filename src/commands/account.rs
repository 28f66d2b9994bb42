use crate::{
    account::{AccountError, Registration, TranslatorApplication},
    display,
    framework::AppData,
};

pub async fn register(
    data: &AppData,
    username: String,
    email: String,
    password: String,
) -> crate::Result<()> {
    let registration = Registration {
        username,
        email,
        password,
    };

    let message = data.account().register(&registration).await?;
    println!(
        "{}",
        message.or("Registered. Check your email for the one-time password.")
    );

    Ok(())
}

pub async fn verify(data: &AppData, email: &str, otp: &str) -> crate::Result<()> {
    let message = data.account().verify_email(email, otp).await?;
    println!("{}", message.or("Email verified, you can log in now."));

    Ok(())
}

pub async fn resend_otp(data: &AppData, email: &str) -> crate::Result<()> {
    let message = data.account().resend_otp(email).await?;
    println!("{}", message.or("Sent a new one-time password."));

    Ok(())
}

pub async fn login(data: &AppData, email: &str, password: &str) -> crate::Result<()> {
    let session = data.account().login(email, password).await?;
    println!("logged in as {}", session.username().unwrap_or(email));

    Ok(())
}

pub async fn logout(data: &AppData) -> crate::Result<()> {
    if data.account().logout().await? {
        println!("logged out");
    } else {
        println!("wasn't logged in");
    }

    Ok(())
}

pub async fn profile(data: &AppData) -> crate::Result<()> {
    let profile = data.account().profile().await?;

    println!("{} <{}>", profile.username, profile.email);
    println!("id:       {}", profile.id);
    println!(
        "role:     {}",
        profile.role.as_deref().unwrap_or(display::NOT_AVAILABLE)
    );
    println!(
        "verified: {}",
        profile
            .is_verified
            .map_or(display::NOT_AVAILABLE, |verified| if verified {
                "yes"
            } else {
                "no"
            })
    );
    println!("joined:   {}", display::format_date(profile.created_at.as_deref()));

    let session = data
        .account()
        .session()
        .load()
        .await
        .map_err(AccountError::from)?;

    if let Some(session) = session {
        println!("session:  since {}", session.saved_at().format("%d/%m/%Y"));
    }

    Ok(())
}

pub async fn follow(data: &AppData, manga_id: &str) -> crate::Result<()> {
    let message = data.account().follow(manga_id).await?;
    println!("{}", message.or("Followed."));

    Ok(())
}

pub async fn unfollow(data: &AppData, manga_id: &str) -> crate::Result<()> {
    let message = data.account().unfollow(manga_id).await?;
    println!("{}", message.or("Unfollowed."));

    Ok(())
}

pub async fn follows(data: &AppData) -> crate::Result<()> {
    let follows = data.account().follows().await?;

    if follows.is_empty() {
        println!("Not following anything yet.");
        return Ok(());
    }

    for followed in follows {
        println!(
            "{title}  {id}  since {since}",
            title = followed.title.as_deref().unwrap_or(display::UNKNOWN_TITLE),
            id = followed.manga_id,
            since = display::format_date(followed.followed_at.as_deref()),
        );
    }

    Ok(())
}

pub async fn apply_translator(
    data: &AppData,
    application: &TranslatorApplication,
) -> crate::Result<()> {
    let message = data.account().apply_translator(application).await?;
    println!("{}", message.or("Application sent."));

    Ok(())
}
