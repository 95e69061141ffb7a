//! Landing page: navbar, collapsed menu, and the scrollable marketing page.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
};

use crate::{
    descriptors::{ColorToken, Describe, FeatureMark, IconToken},
    layout,
    plans::PlanCatalog,
    routes::{LandingSection, NavbarEntry},
    view::NavbarState,
    widgets::effects,
};

/// Links shown inline on wide terminals; the rest live in the menu.
const DESKTOP_LINKS: [NavbarEntry; 3] = [NavbarEntry::Home, NavbarEntry::Features, NavbarEntry::Pricing];

const FEATURES: [(IconToken, &str, &str); 6] = [
    (
        IconToken::Sparkles,
        "AI Resume Optimization",
        "Our AI analyzes your resume and suggests improvements to make it stand out to recruiters and bypass ATS systems.",
    ),
    (
        IconToken::Briefcase,
        "Automated Applications",
        "Apply to multiple jobs with a single click - our system automatically tailors your application for each position.",
    ),
    (
        IconToken::Clock,
        "Job Tracking Dashboard",
        "Keep track of all your applications, interviews, and follow-ups in one organized dashboard.",
    ),
    (
        IconToken::Target,
        "AI Job Matching",
        "Our AI matches your skills and preferences to jobs where you have the highest chance of success.",
    ),
    (
        IconToken::Check,
        "Interview Preparation",
        "Get personalized interview preparation tips and practice questions based on the job you're applying for.",
    ),
    (
        IconToken::Clock,
        "Smart Notifications",
        "Receive timely reminders for follow-ups and upcoming interviews - never miss an opportunity.",
    ),
];

const STEPS: [(&str, &str); 3] = [
    (
        "Create Your Profile",
        "Upload your resume or build one from scratch with our AI-powered resume builder.",
    ),
    (
        "Set Your Preferences",
        "Tell us what jobs you're interested in and let our AI find the perfect matches.",
    ),
    (
        "Apply & Track",
        "Apply to jobs with one click and track your applications in your personalized dashboard.",
    ),
];

const FOOTER: [(&str, &str); 4] = [
    ("Platform", "Features · Pricing · Testimonials · FAQ"),
    ("Resources", "Blog · Career Tips · Resume Templates · Job Search Guide"),
    ("Company", "About · Careers · Contact · Press"),
    ("Legal", "Privacy Policy · Terms of Service · Cookies · Security"),
];

/// Rendered landing page with the first line of every section.
pub struct LandingPage {
    pub lines: Vec<Line<'static>>,
    anchors: Vec<(LandingSection, u16)>,
}

impl LandingPage {
    /// Lay the page out for a viewport `width` columns wide.
    pub fn build(width: u16, plans: &PlanCatalog, phase: u64) -> Self {
        let mut page = PageBuilder {
            lines: Vec::new(),
            anchors: Vec::new(),
            wrap: usize::from(width.saturating_sub(4)).max(20),
        };

        page.section(LandingSection::Hero);
        page.blank();
        page.push(Line::from(Span::styled(
            " Now in Beta - Limited Spots Available ",
            Style::default()
                .fg(ColorToken::Brand.color())
                .add_modifier(Modifier::BOLD),
        )));
        page.blank();
        page.push(Line::from(vec![
            Span::styled("Automate Your ", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(
                "Job Hunt",
                Style::default()
                    .fg(effects::gradient_color(phase))
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        page.paragraph(
            "AI-powered resume optimization and job application automation to help you land your dream job faster, with less effort.",
            Style::default().fg(Color::Gray),
        );
        page.blank();
        page.push(Line::from(vec![
            Span::styled(
                " Get Started Free → ",
                Style::default()
                    .fg(Color::White)
                    .bg(ColorToken::Brand.color())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled("[ Watch Demo ]", Style::default().fg(ColorToken::Brand.color())),
        ]));
        page.blank();

        page.section(LandingSection::Features);
        page.heading(
            "Smart Features for Modern Job Seekers",
            "Our AI-powered platform handles the tedious parts of job hunting so you can focus on interviews.",
        );
        for (icon, title, description) in FEATURES {
            page.push(Line::from(Span::styled(
                format!("{} {title}", icon.glyph()),
                Style::default()
                    .fg(ColorToken::Brand.color())
                    .add_modifier(Modifier::BOLD),
            )));
            page.paragraph(description, Style::default().fg(Color::Gray));
            page.blank();
        }

        page.section(LandingSection::HowItWorks);
        page.heading(
            "How It Works",
            "Three simple steps to revolutionize your job search process",
        );
        for (n, (title, description)) in STEPS.iter().enumerate() {
            page.push(Line::from(vec![
                Span::styled(
                    format!(" {} ", n + 1),
                    Style::default()
                        .fg(Color::Black)
                        .bg(ColorToken::Brand.color()),
                ),
                Span::styled(
                    format!(" {title}"),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ]));
            page.paragraph(description, Style::default().fg(Color::Gray));
            page.blank();
        }

        page.section(LandingSection::Pricing);
        page.heading(
            "Simple, Transparent Pricing",
            "Choose the plan that fits your job search needs",
        );
        for plan in plans.plans() {
            let tier = plan.tier.descriptor();
            let mut title = vec![Span::styled(
                format!("{} {} {}", tier.icon.glyph(), plan.name, plan.price.headline()),
                Style::default()
                    .fg(tier.color.color())
                    .add_modifier(Modifier::BOLD),
            )];
            if let Some(note) = plan.price.billing_note() {
                title.push(Span::styled(
                    format!(" {note}"),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            if plans.is_popular(plan) {
                title.push(Span::styled(
                    "  Most Popular",
                    Style::default().fg(ColorToken::Amber.color()),
                ));
            }
            page.push(Line::from(title));
            page.paragraph(&plan.description, Style::default().fg(Color::Gray));
            for feature in plan.features.iter().filter(|f| f.included) {
                let mark = FeatureMark::Included.descriptor();
                page.push(Line::from(vec![
                    Span::styled(
                        format!("  {} ", mark.icon.glyph()),
                        Style::default().fg(mark.color.color()),
                    ),
                    Span::raw(feature.name.clone()),
                ]));
            }
            page.blank();
        }
        page.push(Line::from(Span::styled(
            "Need a team plan? [ Contact Sales ]",
            Style::default().fg(Color::Gray),
        )));
        page.blank();

        page.section(LandingSection::CallToAction);
        page.heading(
            "Ready to Transform Your Job Search?",
            "Join thousands of job seekers who are saving time and landing better jobs with SmartJobber.",
        );
        page.push(effects::shimmer_line("Get Started Free →", phase));
        page.blank();

        page.section(LandingSection::Footer);
        for (heading, links) in FOOTER {
            page.push(Line::from(vec![
                Span::styled(
                    format!("{heading:<10}"),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(links, Style::default().fg(Color::Gray)),
            ]));
        }
        page.blank();
        page.push(Line::from(Span::styled(
            "© 2023 SmartJobber. All rights reserved.",
            Style::default().fg(Color::DarkGray),
        )));

        Self {
            lines: page.lines,
            anchors: page.anchors,
        }
    }

    /// First line of `section`.
    pub fn offset_of(&self, section: LandingSection) -> u16 {
        self.anchors
            .iter()
            .find(|(s, _)| *s == section)
            .map(|(_, line)| *line)
            .unwrap_or(0)
    }

    pub fn height(&self) -> u16 {
        u16::try_from(self.lines.len()).unwrap_or(u16::MAX)
    }

    /// Largest scroll offset that still fills a viewport `rows` tall.
    pub fn max_scroll(&self, rows: u16) -> u16 {
        self.height().saturating_sub(rows)
    }
}

struct PageBuilder {
    lines: Vec<Line<'static>>,
    anchors: Vec<(LandingSection, u16)>,
    wrap: usize,
}

impl PageBuilder {
    fn push(&mut self, line: Line<'static>) {
        self.lines.push(line);
    }

    fn blank(&mut self) {
        self.lines.push(Line::from(""));
    }

    fn section(&mut self, section: LandingSection) {
        let at = u16::try_from(self.lines.len()).unwrap_or(u16::MAX);
        self.anchors.push((section, at));
    }

    fn paragraph(&mut self, text: &str, style: Style) {
        for row in textwrap::wrap(text, self.wrap) {
            self.lines.push(Line::from(Span::styled(row.into_owned(), style)));
        }
    }

    fn heading(&mut self, title: &str, subtitle: &str) {
        self.lines.push(Line::from(Span::styled(
            title.to_string(),
            Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )));
        self.paragraph(subtitle, Style::default().fg(Color::Gray));
        self.blank();
    }
}

/// Brand, inline links or the menu toggle, and the auth buttons.
pub fn render_navbar(f: &mut Frame, area: Rect, nav: &NavbarState) {
    let compact = layout::is_compact(area.width);
    let block = if nav.is_scrolled() {
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray))
            .style(Style::default().bg(Color::Rgb(24, 24, 27)))
    } else {
        Block::default()
    };
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut spans = vec![Span::styled(
        "SmartJobber",
        Style::default()
            .fg(ColorToken::Brand.color())
            .add_modifier(Modifier::BOLD),
    )];
    let right = if compact {
        let glyph = if nav.menu_open {
            IconToken::Close
        } else {
            IconToken::Menu
        };
        Line::from(Span::raw(format!("{} ", glyph.glyph())))
    } else {
        for entry in DESKTOP_LINKS {
            spans.push(Span::raw(format!("   {}", entry.label())));
        }
        spans.push(Span::raw("   Resources ▾"));
        Line::from(vec![
            Span::raw(format!("{}  ", NavbarEntry::LogIn.label())),
            Span::styled(
                format!(" {} ", NavbarEntry::SignUp.label()),
                Style::default()
                    .fg(Color::White)
                    .bg(ColorToken::Brand.color()),
            ),
        ])
    };

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(12), Constraint::Length(20)])
        .split(inner);
    f.render_widget(Paragraph::new(Line::from(spans)), cols[0]);
    f.render_widget(Paragraph::new(right).alignment(Alignment::Right), cols[1]);
}

/// Collapsed navbar menu listing every entry.
pub fn render_navbar_menu(f: &mut Frame, area: Rect, cursor: usize) {
    let width = area.width.min(32);
    let height = (NavbarEntry::ALL.len() as u16 + 2).min(area.height);
    let rect = Rect::new(area.right().saturating_sub(width), area.y, width, height);
    f.render_widget(Clear, rect);

    let items: Vec<ListItem> = NavbarEntry::ALL
        .iter()
        .enumerate()
        .map(|(idx, entry)| {
            let style = if idx == cursor {
                Style::default().add_modifier(Modifier::REVERSED)
            } else {
                Style::default()
            };
            ListItem::new(Span::styled(entry.label(), style))
        })
        .collect();
    f.render_widget(
        List::new(items).block(effects::glass_block_selected(" Menu ", true)),
        rect,
    );
}

/// Scrollable page body.
pub fn render_landing(f: &mut Frame, area: Rect, page: LandingPage, scroll: u16) {
    let scroll = scroll.min(page.max_scroll(area.height));
    f.render_widget(
        Paragraph::new(page.lines).scroll((scroll, 0)),
        area.inner(Margin::new(2, 0)),
    );
}
