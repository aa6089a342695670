//! The full 11-slide deck on a dark navy background.

use crate::common::{
    self, banner_row, card_row, flow_row, section_heading, wide_card_row, Comparison, FeatureCard,
    Item, Metric, ScenarioRows,
};
use deck_core::{inches, Bounds, Canvas, Deck, TextOptions, Theme};

pub(crate) fn build(deck: &mut Deck, theme: &Theme) {
    let slides: [fn(&mut Canvas<'_>); 11] = [
        common::title_slide,
        delivered,
        ci_before_after,
        ci_how_it_works,
        mcp_problem,
        mcp_solution,
        mcp_flow,
        combined_impact,
        learnings,
        next_quarter,
        common::thank_you_slide,
    ];
    for draw in slides {
        draw(&mut deck.new_slide(theme));
    }
}

fn delivered(c: &mut Canvas<'_>) {
    common::delivery_slide(
        c,
        "Two projects focused on making teams more productive — by removing repetitive work and making information easier to access.",
        [
            (
                "⚙️",
                "Project 1: Standardized Build Process for React",
                "Created a one-click setup system so any React project team can start working with the same quality process — instead of each team creating their own from scratch.",
            ),
            (
                "🤖",
                "Project 2: AI-Powered Problem Solver (Jenkins MCP)",
                "Connected our build system (Jenkins) with AI so anyone in the team — developers, QA, or managers — can simply ask \"What went wrong?\" and get instant answers in plain language.",
            ),
        ],
    );
}

fn ci_before_after(c: &mut Canvas<'_>) {
    let p = c.palette();
    c.set_background(p.background);
    common::project_header(
        c,
        "01",
        p.purple,
        "React UnifiedCI — Standardized Build Process",
        "Making sure all React project teams follow the same quality process",
    );
    c.add_text(
        Bounds::inches(0.6, 1.6, 10.0, 0.5),
        "Every Team Was Doing It Differently",
        TextOptions::new(26.0).bold().color(p.text_primary),
    );

    Comparison {
        top: 2.3,
        height: 4.5,
        list_top: 3.1,
        list_height: 3.5,
        vs_top: 4.0,
        heading_size: 18.0,
        spacing: 10.0,
        before: (
            "❌  Before",
            &[
                "📄  Every team created their own process from scratch",
                "🔧  Different approaches led to different quality levels",
                "🐛  A fix in one project didn't help other projects",
                "⚠️  Some teams skipped important quality checks",
                "⏱️  Setting up a new project took days of effort",
            ],
        ),
        after: (
            "✅  After My Work",
            &[
                "📦  One ready-made system shared by all teams",
                "🎯  Every project follows the same quality standard",
                "🔄  Fix once — it helps every project automatically",
                "✅  Quality checks happen automatically, nothing skipped",
                "🚀  New project setup now takes minutes",
            ],
        ),
    }
    .draw(c);
}

fn ci_how_it_works(c: &mut Canvas<'_>) {
    const FLOW: [Item; 5] = [
        ("👨‍💻", "Developer Saves Work", "Code is submitted"),
        ("🔍", "Quality Check", "Checks for errors"),
        ("🧪", "Build & Test", "Runs all tests"),
        ("📊", "Report Created", "Pass/fail summary"),
        ("🔔", "Team Notified", "Email & Slack alerts"),
    ];
    const METRICS: [Metric; 4] = [
        ("90%", "Faster Setup"),
        ("100%", "Quality Automated"),
        ("1", "System for All"),
        ("0", "Manual Work"),
    ];
    const RESULTS: [Item; 4] = [
        ("📦", "One Shared System", "All React teams use the same process now"),
        ("✅", "Auto Quality Checks", "Errors caught early, nothing missed"),
        ("🧪", "Automatic Testing", "Tests run on their own with reports"),
        ("📧", "Instant Notifications", "Teams know the status right away"),
    ];

    let p = c.palette();
    c.set_background(p.background);
    section_heading(c, "⚙️  REACT UNIFIEDCI", p.purple, "Simple, Automatic, No Extra Work", 28.0);
    c.add_text(
        Bounds::inches(0.6, 1.4, 9.0, 0.4),
        "Teams just connect their project — the system handles everything else automatically.",
        TextOptions::new(13.0).color(p.text_secondary),
    );

    flow_row(c, 2.2, 2.2, &FLOW);
    banner_row(c, 4.6, 2.8, 3.0, p.banner_primary, &METRICS);
    card_row(c, 5.95, 2.85, 1.3, &RESULTS);
}

fn mcp_problem(c: &mut Canvas<'_>) {
    const PROBLEMS: [Item; 3] = [
        (
            "⏰",
            "Hours Wasted",
            "When something went wrong, someone had to manually go through thousands of lines of data to find what happened. This took hours every time.",
        ),
        (
            "🧑‍💼",
            "Only Experts Could Help",
            "Only a few experienced people could understand the error details. Everyone else had to wait — creating bottlenecks.",
        ),
        (
            "🚧",
            "Everyone Depended on One Team",
            "QA, managers, and other teams always had to ask the same team for updates — they couldn't check on their own.",
        ),
    ];

    let p = c.palette();
    c.set_background(p.background);
    common::project_header(
        c,
        "02",
        p.teal,
        "Jenkins MCP — AI-Powered Problem Solver",
        "Making it easy for anyone to understand and fix issues",
    );
    c.add_text(
        Bounds::inches(0.6, 1.5, 10.0, 0.5),
        "Finding & Fixing Problems Was Painful",
        TextOptions::new(26.0).bold().color(p.text_primary),
    );

    for (i, (icon, title, body)) in PROBLEMS.into_iter().enumerate() {
        let left = inches(0.6) + inches(4.1) * i as i64;
        let inner = left + inches(0.2);
        c.add_rectangle(
            Bounds::new(left, inches(2.3), inches(3.8), inches(3.0)),
            p.card_fill,
            Some(p.card_border),
            Some(0.04),
        );
        c.add_text(
            Bounds::new(inner, inches(2.5), inches(3.4), inches(0.5)),
            icon,
            TextOptions::new(32.0),
        );
        c.add_text(
            Bounds::new(inner, inches(3.05), inches(3.4), inches(0.35)),
            title,
            TextOptions::new(15.0).bold().color(p.text_primary),
        );
        c.add_text(
            Bounds::new(inner, inches(3.5), inches(3.4), inches(1.5)),
            body,
            TextOptions::new(11.0).color(p.text_secondary),
        );
    }
}

fn mcp_solution(c: &mut Canvas<'_>) {
    const BENEFITS: [Item; 3] = [
        ("👨‍💻", "Developers", "\"Why did my project fail?\"\n→ Instant answer + fix"),
        ("🧪", "QA Team", "\"Show all failures from today\"\n→ Full summary in seconds"),
        ("👔", "Managers", "\"Is this ready for release?\"\n→ AI checks & gives clear answer"),
    ];

    let p = c.palette();
    c.set_background(p.background);
    section_heading(c, "💡  JENKINS MCP — THE SOLUTION", p.teal, "Just Ask — AI Does the Rest", 28.0);
    c.add_text(
        Bounds::inches(0.6, 1.4, 9.0, 0.4),
        "Now anyone can ask a question in plain English and get an instant answer. No expertise needed.",
        TextOptions::new(13.0).color(p.text_secondary),
    );

    Comparison {
        top: 2.1,
        height: 3.5,
        list_top: 2.85,
        list_height: 2.5,
        vs_top: 3.5,
        heading_size: 17.0,
        spacing: 8.0,
        before: (
            "❌  The Old Way",
            &[
                "🖥️  Log into the system",
                "🔎  Navigate to the right project",
                "📜  Open the error details",
                "👀  Read through everything manually",
                "🤔  Guess what went wrong & try again",
            ],
        ),
        after: (
            "✅  The AI Way",
            &[
                "💬  Just ask: \"What went wrong?\"",
                "⚡  AI pulls up the relevant information instantly",
                "🧠  AI identifies the root cause",
                "🔧  AI suggests the exact solution",
                "✅  You approve — problem fixed",
            ],
        ),
    }
    .draw(c);

    c.add_text(
        Bounds::inches(0.6, 5.9, 10.0, 0.4),
        "Helpful for Everyone — Not Just Experts",
        TextOptions::new(16.0).bold().color(p.text_primary),
    );
    wide_card_row(c, inches(6.3), 1.1, &BENEFITS);
}

fn mcp_flow(c: &mut Canvas<'_>) {
    const FLOW: [Item; 5] = [
        ("💬", "Anyone Asks", "Plain English question"),
        ("🧠", "AI Understands", "Figures out what you need"),
        ("📡", "Gets the Data", "Pulls relevant info"),
        ("🔍", "Finds Root Cause", "Identifies what went wrong"),
        ("✅", "Gives Solution", "Ready-to-apply fix"),
    ];
    const SCENARIOS: [Item; 3] = [
        (
            "Developer asks:",
            "\"My build failed for the React app — what happened?\"",
            "AI: \"The test in LoginComponent.test.js failed because the expected text 'Welcome' was not found. Suggested fix: Update the component to render 'Welcome' instead of 'Hello'.\"",
        ),
        (
            "QA asks:",
            "\"How many builds failed today?\"",
            "AI: \"3 out of 12 builds failed today. Here's a summary of each failure with root causes and suggested fixes.\"",
        ),
        (
            "Manager asks:",
            "\"Is the latest release ready to deploy?\"",
            "AI: \"The latest build passed all quality checks and tests. It's ready for deployment. Last successful build: 2 hours ago.\"",
        ),
    ];

    let p = c.palette();
    c.set_background(p.background);
    section_heading(
        c,
        "⚙️  JENKINS MCP",
        p.teal,
        "How It Works — From Question to Solution",
        28.0,
    );

    flow_row(c, 2.0, 2.3, &FLOW);

    c.add_text(
        Bounds::inches(0.6, 4.0, 10.0, 0.4),
        "Real-World Examples",
        TextOptions::new(18.0).bold().color(p.text_primary),
    );
    ScenarioRows {
        top: 4.5,
        pitch: 1.0,
        row_height: 0.85,
        question_width: 3.5,
        question_height: 0.45,
        answer_left: 4.5,
        answer_width: 8.0,
        answer_height: 0.7,
    }
    .draw(c, &SCENARIOS);
}

fn combined_impact(c: &mut Canvas<'_>) {
    const METRICS: [Metric; 4] = [
        ("70%", "Less Time\nFinding Problems"),
        ("90%", "Faster New\nProject Setup"),
        ("100%", "Consistent\nQuality"),
        ("All", "Teams\nSelf-Sufficient"),
    ];

    let p = c.palette();
    c.set_background(p.background);
    section_heading(c, "📊  OVERALL IMPACT", p.gold, "Quarter 3 Results", 34.0);
    c.add_text(
        Bounds::inches(0.6, 1.5, 9.0, 0.4),
        "Both projects together are saving teams significant time, improving quality, and removing bottlenecks.",
        TextOptions::new(14.0).color(p.text_secondary),
    );

    banner_row(c, 2.3, 2.9, 3.15, p.banner_secondary, &METRICS);

    FeatureCard {
        top: 3.9,
        height: 1.6,
        icon_top: 4.0,
        icon_size: 24.0,
        title_top: 4.4,
        title_height: 0.3,
        title_size: 14.0,
        body_top: 4.8,
        body_height: 0.6,
        body_size: 11.0,
    }
    .draw_pair(
        c,
        [
            (
                "🎯",
                "Same High Standard Everywhere",
                "Every React project now follows the same quality process. No more variations between teams — one improvement benefits everyone.",
            ),
            (
                "🙌",
                "Teams Work Independently",
                "With AI assistance, anyone can check project status and understand issues on their own — no waiting, no bottlenecks.",
            ),
        ],
    );
}

fn learnings(c: &mut Canvas<'_>) {
    const LEARNINGS: [Item; 6] = [
        ("🏗️", "Building Scalable Solutions", "Learned to design systems that\nserve multiple teams with one solution"),
        ("🤖", "Working with AI", "Gained hands-on experience connecting\nAI to existing company systems"),
        ("🧪", "Quality & Automation", "Deepened understanding of automated\nquality checks, testing, and reporting"),
        ("🎯", "Problem-First Approach", "Focused on understanding real team\npain points before building solutions"),
        ("🗣️", "Cross-Team Communication", "Improved ability to work with and\npresent to different stakeholders"),
        ("📐", "End-to-End Ownership", "Took ownership from idea to delivery —\nplanning, building, testing, presenting"),
    ];

    let p = c.palette();
    c.set_background(p.background);
    section_heading(c, "📚  GROWTH", p.purple, "What I Learned This Quarter", 34.0);

    for (row, cards) in LEARNINGS.chunks(3).enumerate() {
        wide_card_row(c, inches(1.8) + inches(2.5) * row as i64, 2.1, cards);
    }
}

fn next_quarter(c: &mut Canvas<'_>) {
    const PLANS: [Item; 3] = [
        ("🌐", "Expand to More Platforms", "Extend the standardized process to support more project types beyond React."),
        ("☁️", "Scale for Larger Teams", "Make the system handle higher workloads automatically during busy periods."),
        ("🛡️", "Add Security Checks", "Include automatic safety and compliance checks in every project's process."),
    ];

    let p = c.palette();
    c.set_background(p.background);
    section_heading(c, "🔮  LOOKING AHEAD", p.teal, "Plans for Quarter 4", 34.0);

    for (i, (icon, title, body)) in PLANS.into_iter().enumerate() {
        let left = inches(0.6) + inches(4.1) * i as i64;
        let inner = left + inches(0.2);
        c.add_rectangle(
            Bounds::new(left, inches(2.0), inches(3.8), inches(3.5)),
            p.card_fill,
            Some(p.card_border),
            Some(0.04),
        );
        c.add_text(
            Bounds::new(inner, inches(2.2), inches(3.4), inches(0.5)),
            icon,
            TextOptions::new(40.0),
        );
        c.add_text(
            Bounds::new(inner, inches(2.9), inches(3.4), inches(0.4)),
            title,
            TextOptions::new(17.0).bold().color(p.text_primary),
        );
        c.add_text(
            Bounds::new(inner, inches(3.45), inches(3.4), inches(1.5)),
            body,
            TextOptions::new(13.0).color(p.text_secondary),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck() -> Deck {
        let mut deck = Deck::new();
        build(&mut deck, &Theme::dark());
        deck
    }

    #[test]
    fn test_eleven_slides_on_navy() {
        let deck = deck();
        assert_eq!(deck.slide_count(), 11);
        let navy = Theme::dark().palette.background;
        assert!(deck.slides.iter().all(|s| s.background == Some(navy)));
    }

    #[test]
    fn test_learnings_grid() {
        let deck = deck();
        let slide = &deck.slides[8];
        // Six cards of four shapes each plus the heading pair.
        assert_eq!(slide.shapes.len(), 2 + 6 * 4);
        let second_row = slide
            .shapes
            .iter()
            .find(|s| s.text().as_deref() == Some("🎯"))
            .unwrap();
        assert_eq!(second_row.bounds.top, inches(1.8) + inches(2.5) + inches(0.2));
    }

    #[test]
    fn test_flow_arrows_between_steps_only() {
        let deck = deck();
        for index in [3, 6] {
            let arrows = deck.slides[index]
                .texts()
                .into_iter()
                .filter(|t| t == "→")
                .count();
            assert_eq!(arrows, 4);
        }
    }

    #[test]
    fn test_scenario_quotes_preserved() {
        let deck = deck();
        let texts = deck.slides[6].texts();
        assert!(texts.iter().any(|t| t.contains("LoginComponent.test.js failed")));
        assert!(texts.iter().any(|t| t == "\"How many builds failed today?\""));
    }
}
