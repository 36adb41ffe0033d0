use std::panic::{self, PanicHookInfo};

/// Routes panics through tracing so they end up next to the request logs.
pub fn set_hook() {
    panic::set_hook(Box::new(hook));
}

fn hook(info: &PanicHookInfo<'_>) {
    let payload = info.payload();
    let message = payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("<non-string panic payload>");

    match info.location() {
        Some(location) => error!(
            file = location.file(),
            line = location.line(),
            "panicked: {message}"
        ),
        None => error!("panicked: {message}"),
    }
}
