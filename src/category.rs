/// A fixed life-category. The registry is compile-time constant: tasks are
/// always owned by exactly one of these three, and no category is ever
/// added or removed at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub id: &'static str,
    pub title: &'static str,
    pub priority_label: &'static str,
    pub description: &'static str,
}

pub static CATEGORIES: [Category; 3] = [
    Category {
        id: "belief",
        title: "Belief Framework",
        priority_label: "Highest Priority · Requires Application",
        description: "Practices that reset your heart and mind—prayer, meditation, and \
                      affirmations that reinforce your core identity.",
    },
    Category {
        id: "core",
        title: "Core Skill",
        priority_label: "Second Priority · Requires Application",
        description: "Your signature competency or craft. Capture intentional reps that \
                      sharpen the skill you enjoy practicing.",
    },
    Category {
        id: "permissible",
        title: "Permissible",
        priority_label: "Third Priority · Apply if time permits",
        description: "Interests and investments that are helpful but not essential. Track \
                      ideas that add spiritual or material value.",
    },
];

/// Look up a category by its identifier.
pub fn find(id: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|c| c.id == id)
}

/// Position of a category id within the registry, used by the UI to map an
/// id back to a pane index.
pub fn index_of(id: &str) -> Option<usize> {
    CATEGORIES.iter().position(|c| c.id == id)
}
