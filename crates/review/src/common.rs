//! Slide pieces drawn identically (or nearly so) by both decks.

use deck_core::{inches, Bounds, Canvas, Emu, MultilineOptions, RgbColor, TextOptions};

/// Shown on the title and closing slides.
pub(crate) const PRESENTER: &str = "Manprit Singh Panesar";

/// `(icon, title, description)` rows used by cards and flow steps.
pub(crate) type Item = (&'static str, &'static str, &'static str);

/// `(value, caption)` pairs used by stat boxes and banners.
pub(crate) type Metric = (&'static str, &'static str);

/// Title slide: eyebrow, headline, summary, presenter and three stat boxes.
pub(crate) fn title_slide(c: &mut Canvas<'_>) {
    let p = c.palette();
    c.set_background(p.background);

    c.add_text(
        Bounds::inches(0.5, 0.8, 12.3, 0.4),
        "QUARTER 3 PERFORMANCE REVIEW",
        TextOptions::new(12.0).color(p.purple).bold().centered(),
    );
    c.add_text(
        Bounds::inches(1.0, 1.6, 11.3, 1.5),
        "Making Teams Work\nFaster & Smarter",
        TextOptions::new(44.0).bold().color(p.text_primary).centered(),
    );
    c.add_text(
        Bounds::inches(2.5, 3.4, 8.3, 0.8),
        "Delivered two automation projects that help development teams\nsave time, reduce repeated work, and solve problems faster.",
        TextOptions::new(16.0).color(p.text_secondary).centered(),
    );
    c.add_text(
        Bounds::inches(4.0, 4.4, 5.3, 0.4),
        PRESENTER,
        TextOptions::new(14.0).color(p.text_muted).centered(),
    );

    const STATS: [Metric; 3] = [
        ("2", "Projects Delivered"),
        ("3+", "Teams Benefited"),
        ("70%", "Time Saved"),
    ];
    let mut left = inches(3.2);
    for (value, label) in STATS {
        c.add_rectangle(
            Bounds::new(left, inches(5.2), inches(2.1), inches(1.4)),
            p.card_fill,
            Some(p.card_border),
            Some(0.06),
        );
        c.add_text(
            Bounds::new(left, inches(5.35), inches(2.1), inches(0.6)),
            value,
            TextOptions::new(36.0).bold().color(p.purple).centered(),
        );
        c.add_text(
            Bounds::new(left, inches(5.95), inches(2.1), inches(0.4)),
            label,
            TextOptions::new(10.0).color(p.text_muted).centered(),
        );
        left += inches(2.4);
    }
}

/// "What I delivered" slide: header plus one large card per project.
pub(crate) fn delivery_slide(c: &mut Canvas<'_>, intro: &str, projects: [(&str, &str, &str); 2]) {
    let p = c.palette();
    c.set_background(p.background);

    c.add_text(
        Bounds::inches(0.6, 0.5, 4.0, 0.3),
        "📋  QUARTER AT A GLANCE",
        TextOptions::new(11.0).color(p.purple).bold(),
    );
    c.add_text(
        Bounds::inches(0.6, 1.0, 10.0, 0.6),
        "What I Delivered This Quarter",
        TextOptions::new(34.0).bold().color(p.text_primary),
    );
    c.add_text(
        Bounds::inches(0.6, 1.7, 9.0, 0.5),
        intro,
        TextOptions::new(14.0).color(p.text_secondary),
    );

    for ((card_left, text_left), (icon, title, body)) in [(0.6, 1.0), (6.8, 7.2)].into_iter().zip(projects) {
        c.add_rectangle(
            Bounds::inches(card_left, 2.8, 5.9, 3.5),
            p.card_fill,
            Some(p.card_border),
            Some(0.03),
        );
        c.add_text(Bounds::inches(text_left, 3.0, 5.0, 0.5), icon, TextOptions::new(36.0));
        c.add_text(
            Bounds::inches(text_left, 3.6, 5.2, 0.5),
            title,
            TextOptions::new(16.0).bold().color(p.text_primary),
        );
        c.add_text(
            Bounds::inches(text_left, 4.2, 5.2, 1.5),
            body,
            TextOptions::new(13.0).color(p.text_secondary),
        );
    }
}

/// Numbered badge with the project name and a one-line subtitle.
pub(crate) fn project_header(
    c: &mut Canvas<'_>,
    number: &str,
    accent: RgbColor,
    title: &str,
    subtitle: &str,
) {
    let p = c.palette();
    c.add_rectangle(Bounds::inches(0.6, 0.4, 0.7, 0.7), accent, None, Some(0.1));
    c.add_text(
        Bounds::inches(0.6, 0.45, 0.7, 0.65),
        number,
        TextOptions::new(22.0).bold().color(p.on_accent).centered(),
    );
    c.add_text(
        Bounds::inches(1.5, 0.4, 8.0, 0.4),
        title,
        TextOptions::new(22.0).bold().color(p.text_primary),
    );
    c.add_text(
        Bounds::inches(1.5, 0.85, 8.0, 0.3),
        subtitle,
        TextOptions::new(12.0).color(p.text_secondary),
    );
}

/// Small coloured label above a large heading.
pub(crate) fn section_heading(
    c: &mut Canvas<'_>,
    eyebrow: &str,
    accent: RgbColor,
    heading: &str,
    heading_size: f64,
) {
    let p = c.palette();
    c.add_text(
        Bounds::inches(0.6, 0.4, 4.0, 0.3),
        eyebrow,
        TextOptions::new(11.0).color(accent).bold(),
    );
    c.add_text(
        Bounds::inches(0.6, 0.85, 10.0, 0.5),
        heading,
        TextOptions::new(heading_size).bold().color(p.text_primary),
    );
}

/// Two side-by-side "before" and "after" panels separated by "VS".
pub(crate) struct Comparison<'a> {
    /// Panel top and height, in inches.
    pub top: f64,
    pub height: f64,
    /// Item list top and height, in inches.
    pub list_top: f64,
    pub list_height: f64,
    pub vs_top: f64,
    pub heading_size: f64,
    /// Space before each item, in points.
    pub spacing: f64,
    pub before: (&'a str, &'a [&'a str]),
    pub after: (&'a str, &'a [&'a str]),
}

impl Comparison<'_> {
    pub(crate) fn draw(&self, c: &mut Canvas<'_>) {
        let p = c.palette();
        let panels = [
            (0.6, p.before_fill, p.pink, self.before),
            (6.9, p.after_fill, p.teal, self.after),
        ];

        for (index, (left, fill, accent, (heading, items))) in panels.into_iter().enumerate() {
            let left = inches(left);
            let inner = left + inches(0.4);

            c.add_rectangle(
                Bounds::new(left, inches(self.top), inches(5.8), inches(self.height)),
                fill,
                Some(accent),
                Some(0.03),
            );
            c.add_text(
                Bounds::new(inner, inches(self.top) + inches(0.15), inches(5.0), inches(0.4)),
                heading,
                TextOptions::new(self.heading_size).bold().color(accent),
            );
            c.add_multiline_text(
                Bounds::new(inner, inches(self.list_top), inches(5.0), inches(self.list_height)),
                items,
                MultilineOptions::new(12.0)
                    .color(p.text_secondary)
                    .spacing(self.spacing),
            );

            if index == 0 {
                c.add_text(
                    Bounds::inches(6.4, self.vs_top, 0.6, 0.5),
                    "VS",
                    TextOptions::new(14.0).bold().color(p.text_muted).centered(),
                );
            }
        }
    }
}

/// A left-to-right row of flow steps `pitch` inches apart.
pub(crate) fn flow_row(c: &mut Canvas<'_>, top: f64, pitch: f64, steps: &[Item]) {
    for (i, (icon, title, description)) in steps.iter().enumerate() {
        let left = inches(0.6) + inches(i as f64 * pitch);
        c.add_flow_step(left, inches(top), icon, title, description, i + 1 < steps.len());
    }
}

/// A row of equally sized cards with a 0.2 inch gutter.
pub(crate) fn card_row(c: &mut Canvas<'_>, top: f64, width: f64, height: f64, cards: &[Item]) {
    let width = inches(width);
    for (i, (icon, title, description)) in cards.iter().enumerate() {
        let left = inches(0.6) + (width + inches(0.2)) * i as i64;
        c.add_card(
            Bounds::new(left, inches(top), width, inches(height)),
            icon,
            title,
            description,
            None,
        );
    }
}

/// Cards 4.1 inches apart, each 3.8 inches wide.
pub(crate) fn wide_card_row(c: &mut Canvas<'_>, top: Emu, height: f64, cards: &[Item]) {
    for (i, (icon, title, description)) in cards.iter().enumerate() {
        let left = inches(0.6) + inches(4.1) * i as i64;
        c.add_card(
            Bounds::new(left, top, inches(3.8), inches(height)),
            icon,
            title,
            description,
            None,
        );
    }
}

/// A row of banner metrics.
pub(crate) fn banner_row(
    c: &mut Canvas<'_>,
    top: f64,
    width: f64,
    pitch: f64,
    background: RgbColor,
    metrics: &[Metric],
) {
    for (i, (value, label)) in metrics.iter().enumerate() {
        let left = inches(0.6) + inches(pitch) * i as i64;
        c.add_metric_banner_item(left, inches(top), inches(width), value, label, background);
    }
}

/// Question and answer rows ("Developer asks: ..." / "AI: ...").
pub(crate) struct ScenarioRows {
    pub top: f64,
    pub pitch: f64,
    pub row_height: f64,
    pub question_width: f64,
    pub question_height: f64,
    pub answer_left: f64,
    pub answer_width: f64,
    pub answer_height: f64,
}

impl ScenarioRows {
    pub(crate) fn draw(&self, c: &mut Canvas<'_>, rows: &[Item]) {
        let p = c.palette();
        for (i, (role, question, answer)) in rows.iter().enumerate() {
            let top = inches(self.top) + inches(self.pitch) * i as i64;
            c.add_rectangle(
                Bounds::new(inches(0.6), top, inches(12.1), inches(self.row_height)),
                p.card_fill,
                Some(p.card_border),
                Some(0.02),
            );
            c.add_text(
                Bounds::new(inches(0.8), top + inches(0.05), inches(1.5), inches(0.3)),
                role,
                TextOptions::new(10.0).bold().color(p.teal),
            );
            c.add_text(
                Bounds::new(
                    inches(0.8),
                    top + inches(0.3),
                    inches(self.question_width),
                    inches(self.question_height),
                ),
                question,
                TextOptions::new(10.0).color(p.gold),
            );
            c.add_text(
                Bounds::new(
                    inches(self.answer_left),
                    top + inches(0.08),
                    inches(self.answer_width),
                    inches(self.answer_height),
                ),
                answer,
                TextOptions::new(9.0).color(p.text_secondary),
            );
        }
    }
}

/// Wide bordered card with a left-aligned icon, title and body.
pub(crate) struct FeatureCard {
    pub top: f64,
    pub height: f64,
    pub icon_top: f64,
    pub icon_size: f64,
    pub title_top: f64,
    pub title_height: f64,
    pub title_size: f64,
    pub body_top: f64,
    pub body_height: f64,
    pub body_size: f64,
}

impl FeatureCard {
    /// Draw one card in each half of the slide.
    pub(crate) fn draw_pair(&self, c: &mut Canvas<'_>, cards: [(&str, &str, &str); 2]) {
        let p = c.palette();
        for ((card_left, text_left), (icon, title, body)) in [(0.6, 1.0), (6.8, 7.2)].into_iter().zip(cards) {
            c.add_rectangle(
                Bounds::inches(card_left, self.top, 5.9, self.height),
                p.card_fill,
                Some(p.card_border),
                Some(0.03),
            );
            c.add_text(
                Bounds::inches(text_left, self.icon_top, 0.5, 0.4),
                icon,
                TextOptions::new(self.icon_size),
            );
            c.add_text(
                Bounds::inches(text_left, self.title_top, 5.2, self.title_height),
                title,
                TextOptions::new(self.title_size).bold().color(p.text_primary),
            );
            c.add_text(
                Bounds::inches(text_left, self.body_top, 5.2, self.body_height),
                body,
                TextOptions::new(self.body_size).color(p.text_secondary),
            );
        }
    }
}

/// Closing slide.
pub(crate) fn thank_you_slide(c: &mut Canvas<'_>) {
    let p = c.palette();
    c.set_background(p.background);
    c.add_text(
        Bounds::inches(1.0, 2.2, 11.3, 1.5),
        "Thank You",
        TextOptions::new(60.0).bold().color(p.purple).centered(),
    );
    c.add_text(
        Bounds::inches(1.0, 3.8, 11.3, 0.5),
        "Happy to answer any questions",
        TextOptions::new(18.0).color(p.text_secondary).centered(),
    );
    c.add_text(
        Bounds::inches(1.0, 4.6, 11.3, 0.4),
        "Manprit Singh Panesar · Quarter 3 Review",
        TextOptions::new(14.0).color(p.text_muted).centered(),
    );
}
