// ABOUTME: Seller onboarding wizard screen
// Header with step dots and progress, the active panel's fields, and a navigation footer

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Gauge, Paragraph, Wrap},
    Frame,
};

use crate::app::{AppState, SubmissionStatus};
use crate::panels::{FieldKind, FieldValue, PanelField};
use crate::wizard::password::{self, StrengthBand};
use crate::wizard::regions::{self, REFERENCE_REGIONS};
use crate::wizard::{ChannelPhase, WizardStep};

// Color palette from TUI style guide
const CORNFLOWER_BLUE: Color = Color::Rgb(100, 149, 237);
const GOLD: Color = Color::Rgb(255, 215, 0);
const SELECTION_GREEN: Color = Color::Rgb(100, 200, 100);
const DARK_BG: Color = Color::Rgb(25, 25, 35);
const PANEL_BG: Color = Color::Rgb(30, 30, 40);
const SOFT_WHITE: Color = Color::Rgb(220, 220, 230);
const MUTED_GRAY: Color = Color::Rgb(120, 120, 140);
const SUBDUED_BORDER: Color = Color::Rgb(60, 60, 80);
const ERROR_RED: Color = Color::Rgb(220, 80, 80);
const WARNING_YELLOW: Color = Color::Rgb(220, 180, 80);

/// "[x] " plus a 16-wide name
const REGION_CELL_WIDTH: usize = 20;
const MAX_REGION_COLUMNS: usize = 4;

/// As many region cells per row as fit after the 4-space indent
fn region_columns(width: usize) -> usize {
    (width.saturating_sub(4) / REGION_CELL_WIDTH).clamp(1, MAX_REGION_COLUMNS)
}

/// Shorten `text` to `max` characters with an ellipsis, keeping its end or its start
fn clip(text: &str, max: usize, keep_end: bool) -> String {
    let count = text.chars().count();
    if count <= max {
        return text.to_string();
    }
    let keep = max.saturating_sub(1);
    if keep_end {
        let tail: String = text.chars().skip(count - keep).collect();
        format!("…{tail}")
    } else {
        let head: String = text.chars().take(keep).collect();
        format!("{head}…")
    }
}

pub struct WizardView;

impl WizardView {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        frame.render_widget(Clear, area);
        frame.render_widget(Block::default().style(Style::default().bg(DARK_BG)), area);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(6), // Header with progress
                Constraint::Min(10),   // Active panel
                Constraint::Length(4), // Status and navigation
            ])
            .split(area);

        self.render_header(frame, layout[0], state);
        if state.current_step().is_terminal() {
            self.render_success(frame, layout[1], state);
        } else {
            self.render_panel(frame, layout[1], state);
        }
        self.render_navigation(frame, layout[2], state);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(CORNFLOWER_BLUE))
            .style(Style::default().bg(PANEL_BG));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Length(1), // Step dots
                Constraint::Length(1), // Step counter
                Constraint::Length(1), // Gauge
            ])
            .split(inner);

        let title = Paragraph::new(Line::from(vec![
            Span::styled("🛍️ ", Style::default()),
            Span::styled(
                "Become a Seller",
                Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
            ),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(title, rows[0]);

        self.render_step_dots(frame, rows[1], state);

        let step = state.current_step();
        let counter = if step.is_terminal() {
            Line::from(Span::styled("Registration complete", Style::default().fg(SELECTION_GREEN)))
        } else {
            Line::from(vec![
                Span::styled(
                    format!("Step {} of {}", step.number(), WizardStep::visible_total()),
                    Style::default().fg(SOFT_WHITE),
                ),
                Span::styled("  ·  ", Style::default().fg(SUBDUED_BORDER)),
                Span::styled(step.title(), Style::default().fg(GOLD)),
            ])
        };
        frame.render_widget(Paragraph::new(counter).alignment(Alignment::Center), rows[2]);

        let percent = state.wizard.progress_percent();
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(CORNFLOWER_BLUE).bg(DARK_BG))
            .percent(percent)
            .label(format!("{percent}% Complete"));
        frame.render_widget(gauge, rows[3]);
    }

    /// Dots for the seven data steps; the success screen is not shown
    fn render_step_dots(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let current = state.current_step().number();
        let visible = &WizardStep::all()[..WizardStep::visible_total()];

        let mut spans = Vec::new();
        for (idx, step) in visible.iter().enumerate() {
            let (icon, style) = if step.number() < current {
                ("●", Style::default().fg(SELECTION_GREEN))
            } else if step.number() == current {
                ("◉", Style::default().fg(GOLD).add_modifier(Modifier::BOLD))
            } else {
                ("○", Style::default().fg(MUTED_GRAY))
            };
            spans.push(Span::styled(icon, style));
            if idx < visible.len() - 1 {
                spans.push(Span::styled(" ─ ", Style::default().fg(SUBDUED_BORDER)));
            }
        }

        frame.render_widget(Paragraph::new(Line::from(spans)).alignment(Alignment::Center), area);
    }

    fn render_panel(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let step = state.current_step();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(CORNFLOWER_BLUE))
            .style(Style::default().bg(PANEL_BG))
            .title(format!(" {} ", step.title()))
            .title_style(Style::default().fg(GOLD).add_modifier(Modifier::BOLD));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let content_area = inner.inner(&ratatui::layout::Margin::new(1, 0));
        let width = usize::from(content_area.width);

        let mut lines = vec![
            Line::from(Span::styled(step.description(), Style::default().fg(MUTED_GRAY))),
            Line::from(""),
        ];
        let mut focus_line = 0;

        for (idx, field) in state.fields().iter().enumerate() {
            let focused = idx == state.focused_field;
            if focused {
                focus_line = lines.len();
            }
            lines.extend(self.field_lines(*field, focused, state, width));
        }

        // Lines are never wrapped, so one Line is one row and the offset is exact
        let height = usize::from(content_area.height);
        let offset = focus_line.saturating_sub(height.saturating_sub(4));
        let offset = u16::try_from(offset).unwrap_or(u16::MAX);

        let content = Paragraph::new(lines).scroll((offset, 0));
        frame.render_widget(content, content_area);
    }

    fn field_lines(
        &self,
        field: PanelField,
        focused: bool,
        state: &AppState,
        width: usize,
    ) -> Vec<Line<'static>> {
        let spec = field.spec();
        let value = field.read(state.wizard.draft());
        // Room left for the value after "▶ Label *: " and the cursor
        let room = width.saturating_sub(spec.label.chars().count() + 7).max(8);

        let marker = if focused {
            Span::styled("▶ ", Style::default().fg(GOLD))
        } else {
            Span::styled("  ", Style::default())
        };
        let label_style = if focused {
            Style::default().fg(SOFT_WHITE).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(SOFT_WHITE)
        };
        let required = if spec.required {
            Span::styled(" *", Style::default().fg(ERROR_RED))
        } else {
            Span::raw("")
        };
        let placeholder =
            Span::styled(clip(spec.placeholder, room, false), Style::default().fg(MUTED_GRAY));

        match spec.kind {
            FieldKind::Text { masked } => {
                let text = value.as_text();
                let shown = if text.is_empty() {
                    placeholder
                } else if masked && !state.reveal_passwords {
                    let dots = "•".repeat(text.chars().count());
                    Span::styled(clip(&dots, room, true), Style::default().fg(SOFT_WHITE))
                } else {
                    // While editing, the end of the text is what matters
                    Span::styled(clip(text, room, focused), Style::default().fg(SOFT_WHITE))
                };
                let mut first = vec![
                    marker,
                    Span::styled(spec.label, label_style),
                    required,
                    Span::styled(": ", Style::default().fg(MUTED_GRAY)),
                    shown,
                ];
                if focused {
                    first.push(Span::styled("│", Style::default().fg(GOLD)));
                }
                let mut lines = vec![Line::from(first)];
                lines.extend(self.password_hints(field, state));
                lines
            }
            FieldKind::Choice { options } => {
                let shown = match value {
                    FieldValue::Choice(Some(index)) => {
                        let label = options.get(index).copied().unwrap_or_default();
                        Span::styled(
                            clip(label, room.saturating_sub(4), false),
                            Style::default().fg(SOFT_WHITE),
                        )
                    }
                    _ => placeholder,
                };
                let arrows = if focused { GOLD } else { SUBDUED_BORDER };
                vec![Line::from(vec![
                    marker,
                    Span::styled(spec.label, label_style),
                    required,
                    Span::styled(": ", Style::default().fg(MUTED_GRAY)),
                    Span::styled("◀ ", Style::default().fg(arrows)),
                    shown,
                    Span::styled(" ▶", Style::default().fg(arrows)),
                ])]
            }
            FieldKind::Toggle => {
                let checked = value.is_set();
                vec![Line::from(vec![
                    marker,
                    Span::styled(
                        if checked { "[x] " } else { "[ ] " },
                        Style::default().fg(if checked { SELECTION_GREEN } else { MUTED_GRAY }),
                    ),
                    Span::styled(spec.label, label_style),
                    required,
                ])]
            }
            FieldKind::File(slot) => {
                let typed = state.file_inputs.get(&slot).cloned().unwrap_or_default();
                let path = if typed.is_empty() {
                    placeholder
                } else {
                    Span::styled(clip(&typed, room, true), Style::default().fg(SOFT_WHITE))
                };
                let mut lines = vec![Line::from(vec![
                    marker,
                    Span::styled(spec.label, label_style),
                    required,
                    Span::styled(": ", Style::default().fg(MUTED_GRAY)),
                    path,
                ])];
                if let FieldValue::File(Some(handle)) = value {
                    lines.push(Line::from(vec![
                        Span::raw("    "),
                        Span::styled("✓ File attached: ", Style::default().fg(SELECTION_GREEN)),
                        Span::styled(handle.name, Style::default().fg(SOFT_WHITE)),
                    ]));
                }
                lines
            }
            FieldKind::Regions => {
                let selected = match value {
                    FieldValue::Regions(regions) => regions,
                    _ => Default::default(),
                };
                let mut lines = vec![Line::from(vec![
                    marker,
                    Span::styled(spec.label, label_style),
                    required,
                    Span::styled(
                        format!("  ({} selected)", selected.len()),
                        Style::default().fg(MUTED_GRAY),
                    ),
                ])];
                let columns = region_columns(width);
                for (row_idx, names) in REFERENCE_REGIONS.chunks(columns).enumerate() {
                    let mut spans = vec![Span::raw("    ")];
                    for (col, name) in names.iter().enumerate() {
                        let idx = row_idx * columns + col;
                        let checked = selected.contains(*name);
                        let mut style = Style::default().fg(if checked {
                            SELECTION_GREEN
                        } else {
                            MUTED_GRAY
                        });
                        if focused && idx == state.region_cursor {
                            style = style.fg(GOLD).add_modifier(Modifier::REVERSED);
                        }
                        let text = format!("{} {:<16}", if checked { "[x]" } else { "[ ]" }, name);
                        spans.push(Span::styled(text, style));
                    }
                    lines.push(Line::from(spans));
                }
                lines
            }
            FieldKind::Otp(channel) => {
                let flow = state.otp.get(channel);
                let (status, color) = match &flow.phase {
                    ChannelPhase::Verified => (flow.phase.describe(), SELECTION_GREEN),
                    ChannelPhase::Failed(_) => (flow.phase.describe(), ERROR_RED),
                    phase if phase.is_pending() => (flow.phase.describe(), WARNING_YELLOW),
                    _ => (flow.phase.describe(), MUTED_GRAY),
                };
                let mut lines = vec![Line::from(vec![
                    marker,
                    Span::styled(spec.label, label_style),
                    required,
                    Span::styled(": ", Style::default().fg(MUTED_GRAY)),
                    Span::styled(status, Style::default().fg(color)),
                ])];
                match flow.phase {
                    ChannelPhase::CodeSent | ChannelPhase::Verifying => {
                        let code = if flow.code_input.is_empty() {
                            placeholder
                        } else {
                            Span::styled(flow.code_input.clone(), Style::default().fg(SOFT_WHITE))
                        };
                        lines.push(Line::from(vec![
                            Span::raw("    Code: "),
                            code,
                            Span::styled("  [Enter] Verify", Style::default().fg(MUTED_GRAY)),
                        ]));
                        if let Some(hint) = &state.otp_hint {
                            lines.push(Line::from(vec![
                                Span::raw("    "),
                                Span::styled(hint.clone(), Style::default().fg(WARNING_YELLOW)),
                            ]));
                        }
                    }
                    ChannelPhase::Idle | ChannelPhase::Failed(_) => {
                        lines.push(Line::from(Span::styled(
                            format!("    [Enter] Send code to your {channel}"),
                            Style::default().fg(MUTED_GRAY),
                        )));
                    }
                    ChannelPhase::Sending | ChannelPhase::Verified => {}
                }
                lines
            }
        }
    }

    /// Strength meter under the password and the mismatch warning under its confirmation
    fn password_hints(&self, field: PanelField, state: &AppState) -> Vec<Line<'static>> {
        use crate::panels::CredentialsField;

        let credentials = &state.wizard.draft().account_credentials;
        match field {
            PanelField::Credentials(CredentialsField::Password) if !credentials.password.is_empty() => {
                let score = password::score(&credentials.password);
                let band = StrengthBand::from_score(score);
                let color = match band {
                    StrengthBand::Weak => ERROR_RED,
                    StrengthBand::Fair => WARNING_YELLOW,
                    StrengthBand::Good => CORNFLOWER_BLUE,
                    StrengthBand::Strong => SELECTION_GREEN,
                };
                let filled = usize::from(score / 5);
                vec![Line::from(vec![
                    Span::raw("    Strength: "),
                    Span::styled("█".repeat(filled), Style::default().fg(color)),
                    Span::styled("░".repeat(20 - filled), Style::default().fg(SUBDUED_BORDER)),
                    Span::styled(format!(" {}", band.label()), Style::default().fg(color)),
                ])]
            }
            PanelField::Credentials(CredentialsField::ConfirmPassword)
                if password::shows_mismatch(&credentials.password, &credentials.confirm_password) =>
            {
                vec![Line::from(vec![
                    Span::raw("    "),
                    Span::styled("✗ Passwords do not match", Style::default().fg(ERROR_RED)),
                ])]
            }
            _ => Vec::new(),
        }
    }

    fn render_success(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(SELECTION_GREEN))
            .style(Style::default().bg(PANEL_BG))
            .title(" Success ")
            .title_style(Style::default().fg(GOLD).add_modifier(Modifier::BOLD));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let info = &state.wizard.draft().personal_info;
        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "✓ Welcome to Our Marketplace!",
                Style::default().fg(SELECTION_GREEN).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("Congratulations, ", Style::default().fg(SOFT_WHITE)),
                Span::styled(
                    info.full_name.clone(),
                    Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    "! Your seller account has been successfully created.",
                    Style::default().fg(SOFT_WHITE),
                ),
            ]),
        ];

        if let Some(receipt) = state.receipt() {
            lines.push(Line::from(vec![
                Span::styled("Account ID: ", Style::default().fg(MUTED_GRAY)),
                Span::styled(receipt.account_id.clone(), Style::default().fg(SOFT_WHITE)),
            ]));
        }

        let draft = state.wizard.draft();
        let shipping = regions::display_order(&draft.shipping_policies.shipping_regions);
        if !shipping.is_empty() {
            lines.push(Line::from(vec![
                Span::styled("Shipping to: ", Style::default().fg(MUTED_GRAY)),
                Span::styled(shipping.join(", "), Style::default().fg(SOFT_WHITE)),
            ]));
        }

        lines.extend([
            Line::from(""),
            Line::from(Span::styled("Next Steps", Style::default().fg(GOLD))),
            Line::from(Span::styled(
                format!("• Check your email: we've sent verification instructions to {}", info.email),
                Style::default().fg(SOFT_WHITE),
            )),
            Line::from(Span::styled(
                "• Complete your profile to attract customers",
                Style::default().fg(SOFT_WHITE),
            )),
            Line::from(Span::styled(
                "• Upload your first products and start selling",
                Style::default().fg(SOFT_WHITE),
            )),
        ]);

        let content = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(content, inner);
    }

    fn render_navigation(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let block = Block::default()
            .borders(Borders::TOP)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(SUBDUED_BORDER))
            .style(Style::default().bg(DARK_BG));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(inner);

        let status = match (&state.error_message, &state.submission) {
            (Some(error), _) => Span::styled(format!("⚠ {error}"), Style::default().fg(ERROR_RED)),
            (None, SubmissionStatus::Submitting) => {
                Span::styled("Creating your seller account...", Style::default().fg(WARNING_YELLOW))
            }
            _ => Span::raw(""),
        };
        frame.render_widget(Paragraph::new(Line::from(status)).alignment(Alignment::Center), rows[0]);

        let key = |k: &'static str| -> Vec<Span<'static>> {
            vec![
                Span::styled("[", Style::default().fg(SUBDUED_BORDER)),
                Span::styled(k, Style::default().fg(GOLD)),
                Span::styled("]", Style::default().fg(SUBDUED_BORDER)),
            ]
        };
        let separator = || Span::styled("  |  ", Style::default().fg(SUBDUED_BORDER));

        let step = state.current_step();
        let mut spans = vec![Span::raw("  ")];

        if step.is_terminal() {
            spans.extend(key("Enter"));
            spans.push(Span::styled(" Finish", Style::default().fg(SOFT_WHITE)));
        } else {
            if step.previous().is_some() {
                spans.extend(key("PgUp"));
                spans.push(Span::styled(" Previous", Style::default().fg(MUTED_GRAY)));
                spans.push(separator());
            }

            let (label, enabled) = if step == WizardStep::Terms {
                (
                    "Create Seller Account",
                    state.wizard.can_create_account()
                        && state.submission != SubmissionStatus::Submitting,
                )
            } else {
                ("Next", state.wizard.blocker().is_none())
            };
            let (key_color, text_color) = if enabled {
                (GOLD, SOFT_WHITE)
            } else {
                (MUTED_GRAY, MUTED_GRAY)
            };
            spans.push(Span::styled("[", Style::default().fg(SUBDUED_BORDER)));
            spans.push(Span::styled("PgDn", Style::default().fg(key_color)));
            spans.push(Span::styled("]", Style::default().fg(SUBDUED_BORDER)));
            spans.push(Span::styled(format!(" {label}"), Style::default().fg(text_color)));

            spans.push(separator());
            spans.extend(key("F1"));
            spans.push(Span::styled(" Help", Style::default().fg(MUTED_GRAY)));
            spans.push(separator());
            spans.extend(key("Esc"));
            spans.push(Span::styled(" Quit", Style::default().fg(MUTED_GRAY)));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)).alignment(Alignment::Center), rows[1]);
    }
}

impl Default for WizardView {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_columns_follow_width() {
        // 80-column terminal leaves 76 for panel content
        assert_eq!(region_columns(76), 3);
        assert_eq!(region_columns(116), 4);
        assert_eq!(region_columns(10), 1);
    }

    #[test]
    fn test_clip_keeps_requested_end() {
        assert_eq!(clip("short", 10, true), "short");
        assert_eq!(clip("abcdefghij", 5, true), "…ghij");
        assert_eq!(clip("abcdefghij", 5, false), "abcd…");
    }
}
