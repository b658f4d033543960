//! Fixed text shown alongside the journal.

/// Built-in daily prompts. One is picked at random per session.
pub const DAILY_PROMPTS: &[&str] = &[
    "What is actually happening, apart from what you expected to happen?",
    "Which role are you playing right now, and who assigned it to you?",
    "What has changed since your last observation?",
    "Where is energy leaking out of the system?",
    "What would an outsider notice first?",
    "Which decision are you avoiding, and whose decision is it?",
    "What stage is this really in, not the stage you hope for?",
    "What single fact would change your mind today?",
];

/// Reminders of what not to do while observing.
pub const FORBIDDEN_ACTIONS: &[&str] = &[
    "Acting on the object before naming its state.",
    "Making decisions that belong to a role you do not hold.",
    "Treating a symptom as its cause.",
    "Recording opinions as facts.",
    "Intervening while you are only observing.",
    "Rescuing an object that is already terminating.",
];
