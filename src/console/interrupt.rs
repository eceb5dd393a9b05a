use crate::play::Cancel;

/// Turn Ctrl+C into cancellation. The first interrupt raises the token so
/// the game can wind down; a second one exits on the spot. Either way the
/// process leaves with status 0.
pub fn interrupts(cancel: Cancel) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_err() {
            log::warn!("unable to listen for interrupts");
            return;
        }
        println!();
        log::warn!("interrupt received, leaving the table");
        cancel.cancel();
        if tokio::signal::ctrl_c().await.is_ok() {
            println!();
            log::warn!("violent interrupt received, exiting immediately");
            std::process::exit(0);
        }
    });
}
