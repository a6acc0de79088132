//! The stock desktop tree every fresh [`VfsMem`](super::VfsMem) starts from.

use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{TimeZone, Utc};

use crate::types::{FsNode, NodeMap};

/// Fixed UTC instant for seeded timestamps.
fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> SystemTime {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .map(SystemTime::from)
        .unwrap_or(UNIX_EPOCH)
}

/// Default stamp for entries without a more specific history.
fn stock() -> SystemTime {
    at(2025, 1, 15, 10, 0)
}

fn dir(name: &str, children: Vec<FsNode>, modified: SystemTime) -> FsNode {
    FsNode::dir(name, children.into(), modified)
}

fn text(name: &str, content: &str, modified: SystemTime) -> FsNode {
    FsNode::file(name, content, modified)
}

fn blob(name: &str, size: u64, modified: SystemTime) -> FsNode {
    FsNode::placeholder(name, size, modified)
}

fn desktop() -> FsNode {
    dir(
        "Desktop",
        vec![
            text(
                "Notes.txt",
                "Meeting notes from last week.\nRemember to follow up on the project timeline.\nNext meeting: Friday 2pm.",
                at(2025, 2, 6, 8, 0),
            ),
            dir(
                "Project Files",
                vec![
                    text(
                        "index.html",
                        "<!DOCTYPE html>\n<html>\n<head><title>My App</title></head>\n<body>\n<h1>Hello World</h1>\n</body>\n</html>",
                        at(2025, 1, 28, 16, 22),
                    ),
                    text(
                        "styles.css",
                        "body {\n  font-family: 'Segoe UI', sans-serif;\n  margin: 0;\n  padding: 20px;\n}",
                        at(2025, 1, 28, 16, 30),
                    ),
                    text(
                        "app.js",
                        "// Main application\nconsole.log('Hello World');\n\nfunction init() {\n  document.title = 'My App';\n}\n\ninit();",
                        at(2025, 1, 29, 10, 0),
                    ),
                ],
                at(2025, 1, 29, 10, 0),
            ),
            dir(
                "Screenshots",
                vec![
                    blob("screenshot-01.png", 1_258_291, at(2025, 2, 4, 17, 12)),
                    blob("screenshot-02.png", 1_003_520, at(2025, 2, 5, 9, 30)),
                ],
                at(2025, 2, 5, 9, 30),
            ),
        ],
        at(2025, 2, 6, 8, 0),
    )
}

fn documents() -> FsNode {
    dir(
        "Documents",
        vec![
            blob("Meeting Notes.docx", 250_880, at(2025, 1, 28, 16, 22)),
            blob("Budget 2025.xlsx", 159_744, at(2025, 2, 2, 11, 30)),
            blob("Report.pdf", 2_411_724, at(2025, 1, 30, 13, 45)),
            text(
                "readme.txt",
                "This is a readme file.\n\nWelcome to the project!\nPlease read the documentation before getting started.",
                stock(),
            ),
            text(
                "notes.txt",
                "Meeting Notes - January 2025\n\n- Discuss project timeline\n- Review budget\n- Assign tasks to team members\n- Follow up next week",
                stock(),
            ),
            text(
                "todo.txt",
                "TODO List:\n\n[x] Set up development environment\n[x] Write initial code\n[ ] Add unit tests\n[ ] Deploy to production\n[ ] Write documentation",
                stock(),
            ),
        ],
        at(2025, 2, 2, 11, 30),
    )
}

fn media() -> Vec<FsNode> {
    vec![
        dir(
            "Downloads",
            vec![
                blob("setup.exe", 47_829_606, at(2025, 2, 5, 15, 15)),
                blob("photo.jpg", 3_984_588, at(2024, 12, 25, 15, 30)),
                blob("archive.zip", 13_002_342, at(2025, 1, 10, 9, 0)),
            ],
            at(2025, 2, 5, 15, 15),
        ),
        dir(
            "Pictures",
            vec![
                blob("wallpaper.jpg", 5_452_595, at(2024, 11, 15, 14, 0)),
                dir(
                    "Vacation",
                    vec![
                        blob("beach.jpg", 4_299_161, at(2024, 8, 15, 10, 30)),
                        blob("mountain.jpg", 3_879_731, at(2024, 8, 16, 15, 0)),
                    ],
                    at(2024, 8, 16, 15, 0),
                ),
                dir(
                    "Screenshots",
                    vec![blob("capture-01.png", 1_572_864, at(2025, 1, 20, 10, 45))],
                    at(2025, 1, 20, 10, 45),
                ),
            ],
            at(2025, 1, 20, 10, 45),
        ),
        dir(
            "Music",
            vec![blob("playlist.m3u", 2_048, at(2025, 1, 5, 20, 0))],
            at(2025, 1, 5, 20, 0),
        ),
        dir(
            "Videos",
            vec![blob("tutorial.mp4", 157_286_400, at(2024, 12, 20, 16, 0))],
            at(2024, 12, 20, 16, 0),
        ),
    ]
}

fn home_files() -> Vec<FsNode> {
    vec![
        text(
            "config.json",
            "{\n  \"name\": \"my-app\",\n  \"version\": \"1.0.0\",\n  \"debug\": false\n}",
            stock(),
        ),
        text(
            "config.ini",
            "[General]\ntheme=dark\nlanguage=en-US\nautosave=true\n\n[Editor]\nfont_size=14\nword_wrap=true\ntab_size=4",
            stock(),
        ),
        text(
            "log.txt",
            "[2025-01-15 08:30:00] Application started\n[2025-01-15 08:30:01] Loading configuration...\n[2025-01-15 08:30:02] Configuration loaded successfully\n[2025-01-15 08:30:05] Server listening on port 3000",
            at(2025, 1, 15, 8, 30),
        ),
        text(
            "readme.md",
            "# My Project\n\nThis is a sample project.\n\n## Getting Started\n\nRun the following command to begin.",
            stock(),
        ),
    ]
}

fn c_drive() -> FsNode {
    let mut user = vec![desktop(), documents()];
    user.extend(media());
    user.extend(home_files());

    let system = at(2024, 10, 1, 12, 0);
    dir(
        "C:",
        vec![
            dir(
                "Users",
                vec![dir("User", user, at(2025, 2, 6, 8, 0))],
                stock(),
            ),
            dir(
                "Windows",
                vec![
                    blob("explorer.exe", 3_355_443, system),
                    dir("System32", Vec::new(), system),
                ],
                system,
            ),
            dir("Program Files", Vec::new(), system),
            dir("Program Files (x86)", Vec::new(), system),
        ],
        stock(),
    )
}

fn d_drive() -> FsNode {
    dir(
        "D:",
        vec![
            dir(
                "Backups",
                vec![blob("backup-2025-01.zip", 2_254_857_830, at(2025, 1, 31, 23, 0))],
                at(2025, 1, 31, 23, 0),
            ),
            dir("Games", Vec::new(), at(2025, 1, 1, 12, 0)),
        ],
        stock(),
    )
}

/// Drive table with the stock `C:` and `D:` trees.
pub fn default_drives() -> NodeMap {
    vec![c_drive(), d_drive()].into()
}
