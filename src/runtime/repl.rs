use anyhow::Result;
use chrono::Local;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::catalog;
use crate::models::Model;
use crate::session::{export_filename, Role, Session};
use crate::utils::MentorError;

/// Interactive mentoring loop: pick a module, ask questions, export or reset
/// on demand. One action at a time; the mentor call is awaited to completion
/// before the next line of input is read.
pub struct Repl {
    session: Session,
    model: Box<dyn Model>,
}

impl Repl {
    pub fn new(model: Box<dyn Model>) -> Self {
        Self {
            session: Session::new(),
            model,
        }
    }

    /// Run the loop until the user quits
    pub async fn run(&mut self, preselect: Option<String>) -> Result<()> {
        let mut editor = DefaultEditor::new()?;

        println!("{}", "Welcome to AI Chatbot Mentor".bold());
        println!("Your personalized AI learning assistant\n");

        if let Some(name) = preselect {
            self.session.select_module(&name)?;
            self.print_banner();
        }

        loop {
            if !self.session.is_active() {
                if !self.pick_module(&mut editor)? {
                    break;
                }
                self.print_banner();
            }

            let line = match editor.readline(&format!("{} ", "you>".cyan().bold())) {
                Ok(line) => line,
                Err(ReadlineError::Interrupted) => continue,
                Err(ReadlineError::Eof) => break,
                Err(e) => return Err(e.into()),
            };

            match line.trim() {
                "/quit" | "/exit" => break,
                "/reset" => {
                    self.session.reset()?;
                    println!("Conversation cleared.\n");
                }
                "/export" => self.export_transcript(),
                "/help" => print_help(),
                _ => {
                    let _ = editor.add_history_entry(&line);
                    self.ask(&line).await;
                }
            }
        }

        println!("Goodbye!");
        Ok(())
    }

    /// Show the catalog and read a selection by number or name.
    /// Returns false when the user bails out instead of choosing.
    fn pick_module(&mut self, editor: &mut DefaultEditor) -> Result<bool> {
        println!("Please select a learning module to begin your mentoring session:");
        let modules = catalog::all();
        for (i, module) in modules.iter().enumerate() {
            println!("  {}. {}", i + 1, module.name.green());
        }

        loop {
            let line = match editor.readline("module> ") {
                Ok(line) => line,
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => return Ok(false),
                Err(e) => return Err(e.into()),
            };

            let choice = line.trim();
            if choice.is_empty() {
                continue;
            }
            if choice == "/quit" || choice == "/exit" {
                return Ok(false);
            }

            // Accept either the list number or the exact module name
            let name = match choice.parse::<usize>() {
                Ok(n) if n >= 1 && n <= modules.len() => modules[n - 1].name,
                _ => choice,
            };

            match self.session.select_module(name) {
                Ok(_) => return Ok(true),
                Err(MentorError::InvalidModule(name)) => {
                    println!(
                        "{} unknown module '{}', pick a number between 1 and {}",
                        "error:".red(),
                        name,
                        modules.len()
                    );
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    fn print_banner(&self) {
        if let Some(module) = self.session.module() {
            println!(
                "\nI am your dedicated mentor for {}.",
                module.name.green().bold()
            );
            println!("Ask your questions below. Commands: /export, /reset, /quit\n");
        }
    }

    /// Submit one question and print the reply. Upstream failures leave the
    /// conversation untouched, so the question can simply be asked again.
    async fn ask(&mut self, text: &str) {
        match self.session.submit_question(self.model.as_ref(), text).await {
            Ok(Some(_)) => self.print_last_exchange(),
            Ok(None) => {} // blank input, nothing to do
            Err(e) => println!("{} {}", "error:".red(), e),
        }
    }

    fn print_last_exchange(&self) {
        if let Some(exchange) = self.session.history().last() {
            debug_assert!(exchange.role == Role::Mentor);
            println!("{} {}\n", "mentor>".magenta().bold(), exchange.text);
        }
    }

    fn export_transcript(&self) {
        let module = match self.session.module() {
            Some(module) => module,
            None => return,
        };

        match self.session.export() {
            Ok(blob) => {
                let filename = export_filename(module.name, Local::now());
                match std::fs::write(&filename, blob) {
                    Ok(()) => println!("Conversation saved to {}\n", filename.green()),
                    Err(e) => println!("{} could not write {}: {}", "error:".red(), filename, e),
                }
            }
            Err(MentorError::EmptyTranscript) => {
                println!("Nothing to export yet, ask a question first.\n");
            }
            Err(e) => println!("{} {}", "error:".red(), e),
        }
    }
}

fn print_help() {
    println!("Commands:");
    println!("  /export   save the conversation to a text file");
    println!("  /reset    clear the conversation and pick another module");
    println!("  /quit     leave the session");
    println!("Anything else is sent to your mentor as a question.\n");
}
