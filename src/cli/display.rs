//! Terminal display and UI rendering
//!
//! Features:
//! - Score / streak / problem count badges
//! - Operation selector with the active operation highlighted
//! - Problem, answer field and feedback line
//! - End-of-session summary

use crate::problem::{Operation, Problem};
use crate::session::{Feedback, SessionState};
use crossterm::{
    cursor, execute,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{self, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{stdout, Result as IoResult, Write};

/// Terminal display manager, drawing on the alternate screen
pub struct Display;

impl Display {
    /// Create display on the alternate screen
    pub fn alternate() -> IoResult<Self> {
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        Ok(Display)
    }

    /// Clear screen
    pub fn clear(&self) -> IoResult<()> {
        let mut stdout = stdout();
        execute!(
            stdout,
            terminal::Clear(ClearType::All),
            cursor::MoveTo(0, 0)
        )
    }

    /// Redraw the whole game screen
    pub fn render(&self, session: &SessionState) -> IoResult<()> {
        self.clear()?;
        self.show_title()?;
        self.show_badges(session.score(), session.streak(), session.completed_count())?;
        self.show_operations(session.current_operation())?;
        if let Some(problem) = session.current_problem() {
            self.show_problem(problem, session.feedback())?;
            self.show_input(session.pending_input(), session.accepts_input())?;
            if let Some(feedback) = session.feedback() {
                self.show_feedback(feedback, problem)?;
            }
        }
        self.show_help()?;
        std::io::stdout().flush()
    }

    fn show_title(&self) -> IoResult<()> {
        let mut stdout = stdout();
        execute!(
            stdout,
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::Magenta),
            SetAttribute(Attribute::Bold),
            Print("Math Magician Quest"),
            SetAttribute(Attribute::Reset),
            ResetColor,
            cursor::MoveTo(0, 1),
            SetForegroundColor(Color::DarkGrey),
            Print("Master your math skills with fun!"),
            ResetColor
        )
    }

    /// Score, streak and completed count
    fn show_badges(&self, score: u32, streak: u32, completed: u32) -> IoResult<()> {
        let mut stdout = stdout();
        execute!(
            stdout,
            cursor::MoveTo(0, 3),
            SetForegroundColor(Color::Yellow),
            Print(format!("★ Score: {}", score)),
            ResetColor,
            Print("  |  "),
            SetForegroundColor(Color::Red),
            Print(format!("🔥 Streak: {}", streak)),
            ResetColor,
            Print("  |  "),
            SetForegroundColor(Color::Cyan),
            Print(format!("📝 Problems: {}", completed)),
            ResetColor
        )
    }

    /// Operation selector row, F-key shortcut next to each label
    fn show_operations(&self, current: Operation) -> IoResult<()> {
        let mut out = stdout();
        execute!(out, cursor::MoveTo(0, 5), Print("Choose your challenge: "))?;

        for (i, op) in Operation::ALL.iter().enumerate() {
            let label = format!("[F{}] {} {} ", i + 1, op.symbol(), op.label());
            if *op == current {
                execute!(
                    out,
                    SetForegroundColor(Color::Green),
                    SetAttribute(Attribute::Reverse),
                    Print(label),
                    SetAttribute(Attribute::Reset),
                    ResetColor,
                    Print(" ")
                )?;
            } else {
                execute!(out, Print(label), Print(" "))?;
            }
        }
        Ok(())
    }

    /// Problem line, coloured by feedback once graded
    fn show_problem(&self, problem: &Problem, feedback: Option<Feedback>) -> IoResult<()> {
        let color = match feedback {
            Some(Feedback::Correct) => Color::Green,
            Some(Feedback::Incorrect) => Color::Red,
            None => Color::White,
        };
        let mut stdout = stdout();
        execute!(
            stdout,
            cursor::MoveTo(4, 8),
            SetForegroundColor(color),
            SetAttribute(Attribute::Bold),
            Print(problem.question()),
            SetAttribute(Attribute::Reset),
            ResetColor
        )
    }

    /// Answer field; greyed out while locked
    fn show_input(&self, input: &str, enabled: bool) -> IoResult<()> {
        let (color, text) = match (enabled, input.is_empty()) {
            (true, true) => (Color::DarkGrey, "?"),
            (true, false) => (Color::Yellow, input),
            (false, _) => (Color::DarkGrey, input),
        };
        let mut stdout = stdout();
        execute!(
            stdout,
            cursor::MoveTo(4, 10),
            Print("Your answer: "),
            SetForegroundColor(color),
            Print(text),
            ResetColor
        )
    }

    fn show_feedback(&self, feedback: Feedback, problem: &Problem) -> IoResult<()> {
        let (color, message) = match feedback {
            Feedback::Correct => (
                Color::Green,
                format!(
                    "✅ Correct! +{} points",
                    crate::session::state::POINTS_PER_CORRECT
                ),
            ),
            Feedback::Incorrect => (
                Color::Red,
                format!("❌ Not quite! The answer is {}", problem.expected_answer),
            ),
        };
        let mut stdout = stdout();
        execute!(
            stdout,
            cursor::MoveTo(4, 12),
            SetForegroundColor(color),
            Print(message),
            ResetColor
        )
    }

    /// Show help text
    fn show_help(&self) -> IoResult<()> {
        let mut stdout = stdout();
        execute!(
            stdout,
            cursor::MoveTo(0, 15),
            SetForegroundColor(Color::DarkGrey),
            Print("ENTER check  |  TAB/←/→ or F1-F4 operation  |  F5/Ctrl+R new game  |  ESC quit"),
            ResetColor
        )
    }

    /// Reset terminal state and cleanup
    pub fn shutdown(&self) -> IoResult<()> {
        let mut stdout = stdout();
        execute!(stdout, LeaveAlternateScreen, cursor::Show)?;
        terminal::disable_raw_mode()?;
        Ok(())
    }
}

impl Drop for Display {
    fn drop(&mut self) {
        // Best effort cleanup
        let _ = self.shutdown();
    }
}

/// Summary lines printed after the terminal is restored
pub fn summary_lines(session: &SessionState) -> Vec<String> {
    let stats = session.stats();
    let accuracy = stats
        .overall_accuracy()
        .map(|a| format!("{:.0}%", a * 100.0))
        .unwrap_or_else(|| "-".to_string());

    let mut lines = vec![
        "🎉 Session Complete!".to_string(),
        format!(
            "📊 Score: {} | Problems: {} | Accuracy: {} | Best streak: {} | {:.1}s",
            session.score(),
            session.completed_count(),
            accuracy,
            stats.best_streak(),
            stats.duration_secs()
        ),
    ];

    for op in Operation::ALL {
        let tally = stats.tally(op);
        if tally.attempted > 0 {
            lines.push(format!(
                "   {} {:<14} {}/{} correct",
                op.symbol(),
                op.label(),
                tally.correct,
                tally.attempted
            ));
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::random::ScriptedRandom;

    #[test]
    fn test_summary_lists_only_attempted_operations() {
        let mut rng = ScriptedRandom::new(&[3, 4]);
        let mut session = SessionState::new(Operation::Multiplication, &mut rng);
        session.record_input("12");
        session.submit_answer();

        let lines = summary_lines(&session);
        assert!(lines[1].contains("Score: 10"));
        assert!(lines[1].contains("Accuracy: 100%"));
        assert_eq!(lines.len(), 3);
        assert!(lines[2].contains("Multiplication"));
        assert!(lines[2].contains("1/1 correct"));
    }

    #[test]
    fn test_summary_without_attempts() {
        let mut rng = ScriptedRandom::new(&[]);
        let session = SessionState::new(Operation::Addition, &mut rng);
        let lines = summary_lines(&session);
        assert_eq!(lines.len(), 2);
        assert!(lines[1].contains("Accuracy: -"));
    }
}
