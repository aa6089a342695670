//! The compact 8-slide deck on a white background.

use crate::common::{
    self, banner_row, card_row, flow_row, section_heading, wide_card_row, Comparison, FeatureCard,
    Item, Metric, ScenarioRows,
};
use deck_core::{inches, Bounds, Canvas, Deck, TextOptions, Theme};

pub(crate) fn build(deck: &mut Deck, theme: &Theme) {
    let slides: [fn(&mut Canvas<'_>); 8] = [
        common::title_slide,
        delivered,
        ci_before_after,
        ci_how_it_works,
        mcp_before_after,
        mcp_how_it_works,
        impact_and_learnings,
        common::thank_you_slide,
    ];
    for draw in slides {
        draw(&mut deck.new_slide(theme));
    }
}

fn delivered(c: &mut Canvas<'_>) {
    common::delivery_slide(
        c,
        "Focused on two projects — one to standardize how teams set up their projects, and one to let AI help everyone solve problems instantly.",
        [
            (
                "⚙️",
                "React UnifiedCI — Standardized Project Setup",
                "Built a shared, ready-to-use system so every React web application team follows the same quality process — instead of each team creating their own setup from scratch every time.",
            ),
            (
                "🤖",
                "Jenkins MCP — AI-Powered Problem Solver",
                "Connected our build system (Jenkins) with AI, so anyone can simply ask \"What went wrong?\" in plain English and get an instant answer — no expertise needed.",
            ),
        ],
    );
}

fn ci_before_after(c: &mut Canvas<'_>) {
    const METRICS: [Metric; 4] = [
        ("90%", "Faster Setup"),
        ("100%", "Quality Automated"),
        ("1", "System for All"),
        ("0", "Manual Work"),
    ];

    let p = c.palette();
    c.set_background(p.background);
    common::project_header(
        c,
        "01",
        p.purple,
        "React UnifiedCI",
        "One shared system for all React web application projects",
    );

    Comparison {
        top: 1.7,
        height: 4.2,
        list_top: 2.5,
        list_height: 3.0,
        vs_top: 3.5,
        heading_size: 17.0,
        spacing: 10.0,
        before: (
            "❌  Before",
            &[
                "📄  Each team wrote their own setup from scratch",
                "🔧  Different quality levels across teams",
                "⚠️  Some teams skipped important checks",
                "⏱️  New project setup took days",
            ],
        ),
        after: (
            "✅  After",
            &[
                "📦  One shared system used by all teams",
                "🎯  Same quality standard everywhere",
                "✅  All checks run automatically, nothing skipped",
                "🚀  New project setup in minutes",
            ],
        ),
    }
    .draw(c);

    banner_row(c, 6.2, 2.8, 3.0, p.banner_primary, &METRICS);
}

fn ci_how_it_works(c: &mut Canvas<'_>) {
    const FLOW: [Item; 5] = [
        ("👨‍💻", "Developer Saves Work", "Code is submitted"),
        ("🔍", "Quality Check", "Checks for errors automatically"),
        ("🧪", "Build & Test", "Builds project & runs tests"),
        ("📊", "Report Created", "Clear pass/fail report"),
        ("🔔", "Team Notified", "Email & Slack alerts"),
    ];
    const RESULTS: [Item; 4] = [
        ("📦", "One Shared System", "All React teams use the same process now"),
        ("✅", "Auto Quality Checks", "Errors caught early, nothing missed"),
        ("🧪", "Automatic Testing", "Tests run on their own with clear reports"),
        ("📧", "Instant Notifications", "Teams know the status right away"),
    ];

    let p = c.palette();
    c.set_background(p.background);
    section_heading(c, "⚙️  REACT UNIFIEDCI", p.purple, "How It Works — Fully Automatic", 28.0);
    c.add_text(
        Bounds::inches(0.6, 1.4, 9.0, 0.4),
        "Teams just connect their project — the system does the quality checking, testing, and reporting on its own.",
        TextOptions::new(13.0).color(p.text_secondary),
    );

    flow_row(c, 2.3, 2.2, &FLOW);
    card_row(c, 4.5, 2.85, 1.6, &RESULTS);
}

fn mcp_before_after(c: &mut Canvas<'_>) {
    const BENEFITS: [Item; 3] = [
        ("👨‍💻", "Developers", "\"Why did my project fail?\"\n→ Instant answer + fix"),
        ("🧪", "QA Team", "\"Show all failures from today\"\n→ Full summary in seconds"),
        ("👔", "Managers", "\"Is this ready for release?\"\n→ AI checks & gives clear answer"),
    ];

    let p = c.palette();
    c.set_background(p.background);
    common::project_header(
        c,
        "02",
        p.teal,
        "Jenkins MCP — AI-Powered Problem Solver",
        "Anyone can ask questions in plain English and get instant answers",
    );

    Comparison {
        top: 1.7,
        height: 3.5,
        list_top: 2.5,
        list_height: 2.5,
        vs_top: 3.1,
        heading_size: 17.0,
        spacing: 10.0,
        before: (
            "❌  The Old Way",
            &[
                "🖥️  Log into the system manually",
                "📜  Scroll through thousands of lines to find the error",
                "🤔  Only experts could understand the issues",
                "⏰  Took hours to find and fix a single problem",
            ],
        ),
        after: (
            "✅  The AI Way",
            &[
                "💬  Just ask: \"What went wrong?\"",
                "⚡  AI finds the issue instantly",
                "🧠  Anyone can use it — no expertise needed",
                "✅  Get the fix suggestion in seconds",
            ],
        ),
    }
    .draw(c);

    wide_card_row(c, inches(5.6), 1.6, &BENEFITS);
}

fn mcp_how_it_works(c: &mut Canvas<'_>) {
    const FLOW: [Item; 5] = [
        ("💬", "Anyone Asks", "Plain English question"),
        ("🧠", "AI Understands", "Figures out what you need"),
        ("📡", "Fetches Info", "Gets the right data"),
        ("🔍", "Finds the Answer", "What went wrong & why"),
        ("✅", "Gives Solution", "Ready-to-apply fix"),
    ];
    const SCENARIOS: [Item; 3] = [
        (
            "Developer asks:",
            "\"My build failed — what happened?\"",
            "AI: \"The test failed because the expected text was not found. Suggested fix: Update the component text.\"",
        ),
        (
            "QA asks:",
            "\"How many builds failed today?\"",
            "AI: \"3 out of 12 builds failed today. Here's a summary of each failure with root causes and fixes.\"",
        ),
        (
            "Manager asks:",
            "\"Is the latest release ready to deploy?\"",
            "AI: \"The latest build passed all checks and tests. It's ready for deployment.\"",
        ),
    ];

    let p = c.palette();
    c.set_background(p.background);
    section_heading(c, "⚙️  JENKINS MCP", p.teal, "How It Works — Ask and Get Answers", 28.0);

    flow_row(c, 2.0, 2.3, &FLOW);

    c.add_text(
        Bounds::inches(0.6, 4.0, 10.0, 0.4),
        "Real-World Examples",
        TextOptions::new(18.0).bold().color(p.text_primary),
    );
    ScenarioRows {
        top: 4.6,
        pitch: 0.95,
        row_height: 0.8,
        question_width: 3.2,
        question_height: 0.4,
        answer_left: 4.2,
        answer_width: 8.2,
        answer_height: 0.6,
    }
    .draw(c, &SCENARIOS);
}

fn impact_and_learnings(c: &mut Canvas<'_>) {
    const METRICS: [Metric; 4] = [
        ("70%", "Less Time\nSolving Problems"),
        ("90%", "Faster\nProject Setup"),
        ("100%", "Consistent\nQuality"),
        ("All", "Teams\nSelf-Sufficient"),
    ];
    const LEARNINGS: [Item; 3] = [
        ("🏗️", "Building Scalable Solutions", "Designing one system that\nserves multiple teams"),
        ("🤖", "Working with AI", "Connecting AI to existing\ncompany systems"),
        ("🎯", "End-to-End Ownership", "From idea to delivery —\nplanning, building, presenting"),
    ];

    let p = c.palette();
    c.set_background(p.background);
    section_heading(c, "📊  RESULTS & GROWTH", p.gold, "Quarter 3 Impact & Learnings", 34.0);

    banner_row(c, 1.7, 2.9, 3.15, p.banner_secondary, &METRICS);

    c.add_text(
        Bounds::inches(0.6, 3.2, 10.0, 0.4),
        "Key Learnings",
        TextOptions::new(16.0).bold().color(p.text_primary),
    );
    wide_card_row(c, inches(3.7), 1.8, &LEARNINGS);

    FeatureCard {
        top: 5.8,
        height: 1.4,
        icon_top: 5.9,
        icon_size: 22.0,
        title_top: 6.25,
        title_height: 0.25,
        title_size: 13.0,
        body_top: 6.55,
        body_height: 0.5,
        body_size: 10.0,
    }
    .draw_pair(
        c,
        [
            (
                "🎯",
                "Same High Standard Everywhere",
                "Every project follows the same quality process — one improvement benefits everyone.",
            ),
            (
                "🙌",
                "Teams Work Independently",
                "Anyone can check project status and understand issues on their own — no bottlenecks.",
            ),
        ],
    );
}
