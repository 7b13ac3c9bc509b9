//! Example prompts offered on the empty screen.
//!
//! Picking one fills the draft input; it never submits by itself.

/// A canned query the empty screen offers to first-time users.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExamplePrompt {
    /// Short label shown on the card.
    pub heading: &'static str,
    /// Full query text copied into the input when picked.
    pub message: &'static str,
}

/// The fixed set of example prompts, display order.
pub const EXAMPLE_PROMPTS: [ExamplePrompt; 4] = [
    ExamplePrompt {
        heading: "Search for information",
        message: "Tell me about the latest advances in quantum computing",
    },
    ExamplePrompt {
        heading: "Summarize a page",
        message: "Summarize the article at https://en.wikipedia.org/wiki/Circassia",
    },
    ExamplePrompt {
        heading: "Find a video",
        message: "Find a video on how to cook Italian pasta carbonara",
    },
    ExamplePrompt {
        heading: "Analyze a text",
        message: "Analyze the main themes of George Orwell's \"1984\"",
    },
];
