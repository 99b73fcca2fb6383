//! Startup banners and the console's session summary.

use crate::consts::{AUTHOR, HOMEPAGE, REPO};

/// Which role is starting, with the details worth showing.
pub enum BannerInfo<'a> {
    Gateway { port: u16, model: &'a str },
    Console { gateway: &'a str, theme: &'a str },
}

/// Render the banner text.
pub fn banner_text(info: &BannerInfo) -> String {
    let details = match info {
        BannerInfo::Gateway { port, model } => format!(
            "   role      gateway\n   listen    0.0.0.0:{port}\n   model     {model}\n"
        ),
        BannerInfo::Console { gateway, theme } => format!(
            "   role      console\n   gateway   {gateway}\n   theme     {theme}\n\n   type /help for commands\n"
        ),
    };

    format!(
        r#"
   ╔═══════════════════════════════════════╗
   ║             C R I T I C               ║
   ║     your code, read by a machine      ║
   ╚═══════════════════════════════════════╝

   version   {}
   by        {}
   home      {}
   repo      {}
{}"#,
        env!("CARGO_PKG_VERSION"),
        AUTHOR,
        HOMEPAGE,
        REPO,
        details,
    )
}

/// Print the startup banner.
pub fn print_banner(info: &BannerInfo) {
    println!("{}", banner_text(info));
}

/// Print the console's session summary (reviews + farewell).
pub fn print_session_summary(reviews: usize) {
    if reviews > 0 {
        println!("session: {reviews} review(s)");
    }
    println!("goodbye.");
}
