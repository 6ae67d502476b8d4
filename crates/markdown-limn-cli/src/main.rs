use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use markdown_limn_config::Config;
use markdown_limn_engine::editing::{
    Doc, MergeDirection, ReentrancyGuard, merge_across_boundary, snap_to_char_boundary, split_at,
};
use markdown_limn_engine::{Mark, Run, classify_and_construct, io};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use relative_path::RelativePathBuf;
use std::{env, io::stdout, path::PathBuf, process};

struct App {
    notes_root: PathBuf,
    note: RelativePathBuf,
    doc: Doc,
    /// Absolute caret position in the serialized document.
    cursor: usize,
    guard: ReentrancyGuard,
    dirty: bool,
    autosave: bool,
    status: String,
}

impl App {
    fn open(notes_root: PathBuf, note: RelativePathBuf, autosave: bool) -> Result<Self> {
        let text = match io::read_note(&note, &notes_root) {
            Ok(text) => text,
            Err(io::IoError::NotFound(_)) => String::new(),
            Err(e) => return Err(e.into()),
        };
        let doc = Doc::from_bytes(text.as_bytes())?;
        let cursor = doc.clamp_caret(0);
        Ok(Self {
            notes_root,
            note,
            doc,
            cursor,
            guard: ReentrancyGuard::new(),
            dirty: false,
            autosave,
            status: String::new(),
        })
    }

    fn save(&mut self) -> Result<()> {
        io::write_note(&self.note, &self.notes_root, &self.doc.to_markdown())?;
        self.dirty = false;
        self.status = format!("saved {}", self.note);
        Ok(())
    }

    /// Inserts text at the caret and reclassifies the edited block.
    fn insert(&mut self, text: &str) {
        let Some(pos) = self.doc.resolve(self.cursor) else {
            return;
        };
        let mut source = pos.block.source_text();
        let at = snap_to_char_boundary(&source, pos.offset);
        source.insert_str(at, text);
        let leaf = pos.leaf_index;
        self.doc = self
            .doc
            .replace_leaves(leaf..leaf + 1, vec![classify_and_construct(&source)]);
        self.cursor = self.doc.clamp_caret(self.cursor + text.len());
        self.dirty = true;
    }

    /// Backspace: merge across the boundary at content start, otherwise
    /// delete the previous character.
    fn backspace(&mut self) {
        let Some(pos) = self.doc.resolve(self.cursor) else {
            return;
        };
        if pos.offset <= pos.block.spec_offset {
            let merged = merge_across_boundary(
                &self.doc,
                self.cursor,
                MergeDirection::Backward,
                &mut self.guard,
            );
            if let Some(out) = merged {
                self.doc = self.doc.replace_leaves(out.replace_leaves, out.blocks);
                self.cursor = out.cursor;
                self.guard.finish();
                self.dirty = true;
            }
            return;
        }
        let source = pos.block.source_text();
        let end = pos.offset;
        let start = snap_to_char_boundary(&source, end - 1);
        let mut edited = source;
        edited.replace_range(start..end, "");
        let leaf = pos.leaf_index;
        self.doc = self
            .doc
            .replace_leaves(leaf..leaf + 1, vec![classify_and_construct(&edited)]);
        self.cursor = self.doc.clamp_caret(self.cursor - (end - start));
        self.dirty = true;
    }

    /// Delete: merge across the boundary at block end, otherwise delete
    /// the character under the caret.
    fn delete(&mut self) {
        let Some(pos) = self.doc.resolve(self.cursor) else {
            return;
        };
        if pos.offset >= pos.block.source_len() {
            let merged = merge_across_boundary(
                &self.doc,
                self.cursor,
                MergeDirection::Forward,
                &mut self.guard,
            );
            if let Some(out) = merged {
                self.doc = self.doc.replace_leaves(out.replace_leaves, out.blocks);
                self.cursor = out.cursor;
                self.guard.finish();
                self.dirty = true;
            }
            return;
        }
        let source = pos.block.source_text();
        let start = pos.offset;
        let rest = &source[start..];
        let Some(c) = rest.chars().next() else {
            return;
        };
        let mut edited = source.clone();
        edited.replace_range(start..start + c.len_utf8(), "");
        let leaf = pos.leaf_index;
        self.doc = self
            .doc
            .replace_leaves(leaf..leaf + 1, vec![classify_and_construct(&edited)]);
        self.cursor = self.doc.clamp_caret(self.cursor);
        self.dirty = true;
    }

    /// Enter: split the block at the caret.
    fn split(&mut self) {
        let Some(pos) = self.doc.resolve(self.cursor) else {
            return;
        };
        let outcome = split_at(pos.block, pos.offset);
        let leaf = pos.leaf_index;
        let lower = leaf + outcome.cursor_block;
        self.doc = self.doc.replace_leaves(leaf..leaf + 1, outcome.blocks);
        let leaves = self.doc.leaves();
        if let Some(target) = leaves.get(lower) {
            self.cursor = target.start + target.block.spec_offset;
        }
        self.dirty = true;
    }

    fn move_left(&mut self) {
        let Some(pos) = self.doc.resolve(self.cursor) else {
            return;
        };
        if pos.offset > pos.block.spec_offset {
            let source = pos.block.source_text();
            let prev = snap_to_char_boundary(&source, pos.offset - 1);
            self.cursor = pos.block_start + prev.max(pos.block.spec_offset);
        } else if pos.leaf_index > 0 {
            let leaves = self.doc.leaves();
            let prev = &leaves[pos.leaf_index - 1];
            self.cursor = prev.start + prev.block.source_len();
        }
    }

    fn move_right(&mut self) {
        let Some(pos) = self.doc.resolve(self.cursor) else {
            return;
        };
        if pos.offset < pos.block.source_len() {
            let source = pos.block.source_text();
            let c = source[pos.offset..].chars().next().map_or(1, char::len_utf8);
            self.cursor = pos.block_start + pos.offset + c;
        } else {
            let leaves = self.doc.leaves();
            if let Some(next) = leaves.get(pos.leaf_index + 1) {
                self.cursor = next.start + next.block.spec_offset;
            }
        }
    }

    fn move_vertical(&mut self, down: bool) {
        let Some(pos) = self.doc.resolve(self.cursor) else {
            return;
        };
        let target = if down {
            pos.leaf_index + 1
        } else if pos.leaf_index > 0 {
            pos.leaf_index - 1
        } else {
            return;
        };
        let leaves = self.doc.leaves();
        if let Some(leaf) = leaves.get(target) {
            let local = (pos.offset.max(leaf.block.spec_offset)).min(leaf.block.source_len());
            let local = snap_to_char_boundary(&leaf.block.source_text(), local);
            self.cursor = leaf.start + local.max(leaf.block.spec_offset);
        }
    }

    fn move_line_edge(&mut self, to_end: bool) {
        let Some(pos) = self.doc.resolve(self.cursor) else {
            return;
        };
        self.cursor = if to_end {
            pos.block_start + pos.block.source_len()
        } else {
            pos.block_start + pos.block.spec_offset
        };
    }
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() > 2 {
        eprintln!("Usage: {} [note.md]", args[0]);
        process::exit(1);
    }

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };

    let (notes_root, default_note, autosave) = match config {
        Some(config) => (
            config.notes_path,
            config.default_note,
            config.autosave,
        ),
        None => (PathBuf::from("."), "scratch.md".to_string(), false),
    };

    let note = RelativePathBuf::from(args.get(1).cloned().unwrap_or(default_note));

    if let Err(e) = io::validate_notes_dir(&notes_root) {
        eprintln!(
            "Error: Notes path '{}' is invalid: {e}",
            notes_root.display()
        );
        process::exit(1);
    }

    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::open(notes_root, note, autosave)?;
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    <B as ratatui::backend::Backend>::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Esc => {
                    if app.autosave && app.dirty {
                        app.save()?;
                    }
                    return Ok(());
                }
                KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.save()?;
                }
                KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.insert(&c.to_string());
                }
                KeyCode::Tab => app.insert("\t"),
                KeyCode::Enter => app.split(),
                KeyCode::Backspace => app.backspace(),
                KeyCode::Delete => app.delete(),
                KeyCode::Left => app.move_left(),
                KeyCode::Right => app.move_right(),
                KeyCode::Up => app.move_vertical(false),
                KeyCode::Down => app.move_vertical(true),
                KeyCode::Home => app.move_line_edge(false),
                KeyCode::End => app.move_line_edge(true),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(2)].as_ref())
        .split(f.area());

    let leaves = app.doc.leaves();
    let lines: Vec<Line> = leaves
        .iter()
        .map(|leaf| {
            Line::from(
                leaf.block
                    .runs
                    .iter()
                    .map(|run| Span::styled(run.text.clone(), style_for(run)))
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    let title = format!(
        " {}{} ",
        app.note,
        if app.dirty { " [+]" } else { "" }
    );
    let editor = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(editor, chunks[0]);

    // Caret: one row per block inside the bordered editor area.
    if let Some(pos) = app.doc.resolve(app.cursor) {
        let x = chunks[0].x + 1 + pos.offset as u16;
        let y = chunks[0].y + 1 + pos.leaf_index as u16;
        f.set_cursor_position((x, y));
    }

    let help = Line::from(vec![
        Span::raw("Esc: Quit | Ctrl-S: Save | Enter: Split | Backspace/Delete: Merge  "),
        Span::styled(&app.status, Style::default().fg(Color::Yellow)),
    ]);
    f.render_widget(Paragraph::new(vec![help]), chunks[1]);
}

/// Maps a run's marks to a terminal style. Syntax punctuation is dimmed
/// the way a live-preview surface would fade it.
fn style_for(run: &Run) -> Style {
    let mut style = Style::default();
    if run.marks.is_syntax() {
        return style.fg(Color::DarkGray);
    }
    for mark in run.marks.iter() {
        style = match mark {
            Mark::Strong => style.add_modifier(Modifier::BOLD),
            Mark::Em | Mark::Italic => style.add_modifier(Modifier::ITALIC),
            Mark::Strike => style.add_modifier(Modifier::CROSSED_OUT),
            Mark::Underline => style.add_modifier(Modifier::UNDERLINED),
            Mark::Highlight => style.bg(Color::Yellow).fg(Color::Black),
            Mark::Code => style.fg(Color::Green),
            Mark::Comment => style.fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            Mark::Math | Mark::MathPart(_) => style.fg(Color::Cyan),
            Mark::Link { .. } => style.fg(Color::Blue).add_modifier(Modifier::UNDERLINED),
            Mark::Spec(_) | Mark::Tab { .. } | Mark::ListMarker => style,
        };
    }
    style
}
