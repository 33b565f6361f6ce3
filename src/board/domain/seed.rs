//! Default workflow template and first-run sample data.

use super::{Board, BoardId, BoardList, Card, CardId, ListId};

/// Titles of the lists every new board starts with.
pub const DEFAULT_LIST_TITLES: [&str; 3] = ["To Do", "In Progress", "Done"];

/// Sample boards stored when no persisted collection exists.
#[must_use]
pub fn sample_boards() -> Vec<Board> {
    vec![
        Board::from_parts(
            BoardId::from("1"),
            "Product Development",
            "Track progress on our new product features",
            vec![
                list(
                    "list-1-1",
                    "Backlog",
                    vec![
                        card(
                            "card-1-1-1",
                            "Redesign navigation menu",
                            "Update the navigation for better UX",
                            &["design", "ux"],
                        ),
                        card(
                            "card-1-1-2",
                            "User authentication flow",
                            "Implement secure login and registration",
                            &["security"],
                        ),
                    ],
                ),
                list(
                    "list-1-2",
                    "In Progress",
                    vec![card(
                        "card-1-2-1",
                        "API integration",
                        "Connect with third-party services",
                        &["backend"],
                    )],
                ),
                list(
                    "list-1-3",
                    "Review",
                    vec![card(
                        "card-1-3-1",
                        "Dashboard analytics",
                        "Create data visualization components",
                        &["frontend", "analytics"],
                    )],
                ),
                list(
                    "list-1-4",
                    "Done",
                    vec![card(
                        "card-1-4-1",
                        "User settings page",
                        "Allow users to customize their profiles",
                        &["frontend"],
                    )],
                ),
            ],
        ),
        Board::from_parts(
            BoardId::from("2"),
            "Marketing Campaign",
            "Q3 marketing initiatives",
            vec![
                list(
                    "list-2-1",
                    "To Do",
                    vec![card(
                        "card-2-1-1",
                        "Social media strategy",
                        "Define content plans for each platform",
                        &["planning"],
                    )],
                ),
                list(
                    "list-2-2",
                    "In Progress",
                    vec![card(
                        "card-2-2-1",
                        "Email newsletter",
                        "Create template for monthly updates",
                        &["content"],
                    )],
                ),
                list(
                    "list-2-3",
                    "Complete",
                    vec![card(
                        "card-2-3-1",
                        "SEO optimization",
                        "Improve website ranking for key terms",
                        &["technical"],
                    )],
                ),
            ],
        ),
    ]
}

fn list(id: &str, title: &str, cards: Vec<Card>) -> BoardList {
    BoardList::from_parts(ListId::from(id), title, cards)
}

fn card(id: &str, title: &str, description: &str, labels: &[&str]) -> Card {
    Card::from_parts(
        CardId::from(id),
        title,
        description,
        labels.iter().map(|label| (*label).to_owned()),
    )
}
