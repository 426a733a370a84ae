/// Marker trait for view intents.
///
/// An intent is a user action already decoded from raw input: "next page",
/// "pick the Sci-Fi filter". Raw key codes never reach a reducer.
pub trait Intent: Send + 'static {}
