use owo_colors::OwoColorize;
use std::fmt;

use crate::presentation::formatters::time::format_date;
use crate::presentation::view_models::{
    CompletionViewModel, CreateView, GuideViewModel, InitViewModel, ProgressViewModel,
    SampleViewModel, TopicDetailViewModel, TopicListViewModel,
};

fn check(completed: bool) -> &'static str {
    if completed { "✓" } else { "·" }
}

// --------------------------------------------------------
// Topic List View
// --------------------------------------------------------

impl CreateView for TopicListViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        Box::new(TopicListView { data: self })
    }
}

struct TopicListView<'a> {
    data: &'a TopicListViewModel,
}

impl<'a> fmt::Display for TopicListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", "Data Communication Frameworks".bold())?;
        writeln!(f)?;
        writeln!(
            f,
            "   {:<3} {:<14} {:<30} {:<14} DURATION",
            "#", "TOPIC", "TITLE", "DIFFICULTY"
        )?;
        writeln!(f, "{}", "-".repeat(76))?;

        for topic in &self.data.topics {
            writeln!(
                f,
                " {} {:<3} {:<14} {:<30} {:<14} {} min",
                check(topic.completed),
                topic.number,
                topic.name,
                topic.title,
                topic.difficulty,
                topic.duration_minutes
            )?;
        }

        writeln!(f)?;
        writeln!(
            f,
            "Progress: {}/{} ({}%)",
            self.data.completed, self.data.total, self.data.percent
        )
    }
}

// --------------------------------------------------------
// Topic Detail View
// --------------------------------------------------------

impl CreateView for TopicDetailViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        Box::new(TopicDetailView { data: self })
    }
}

struct TopicDetailView<'a> {
    data: &'a TopicDetailViewModel,
}

fn write_samples(f: &mut fmt::Formatter, samples: &[SampleViewModel]) -> fmt::Result {
    for sample in samples {
        write!(f, "    {:<16} ({})", sample.text, sample.caption)?;
        if let Some(glyph) = &sample.glyph {
            write!(f, "  {}", glyph)?;
        }
        writeln!(f)?;
    }
    Ok(())
}

impl<'a> fmt::Display for TopicDetailView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let d = self.data;
        writeln!(f, "{} {}", d.title.bold(), check(d.completed))?;
        writeln!(f, "{}", d.heading.cyan())?;
        writeln!(f, "Purpose: {}", d.purpose)?;
        writeln!(f)?;

        writeln!(f, "  {}", d.source_role.bold())?;
        write_samples(f, &d.original)?;
        writeln!(f, "      ↓ {} [{}]", d.forward, d.forward_parameter)?;
        write_samples(f, &d.transformed)?;
        match &d.channel_note {
            Some(note) => writeln!(f, "      → {} {}", d.channel, note)?,
            None => writeln!(f, "      → {}", d.channel)?,
        }
        writeln!(f, "  {}", d.destination_role.bold())?;
        write_samples(f, &d.transformed)?;
        writeln!(f, "      ↓ {} [{}]", d.reverse, d.reverse_parameter)?;
        write_samples(f, &d.original)?;
        writeln!(f)?;

        writeln!(f, "{}", "How it works:".yellow().bold())?;
        for note in &d.notes {
            writeln!(f, "  • {}: {}", note.term.bold(), note.detail)?;
        }
        Ok(())
    }
}

// --------------------------------------------------------
// Progress / Completion
// --------------------------------------------------------

impl CreateView for ProgressViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        Box::new(ProgressView { data: self })
    }
}

struct ProgressView<'a> {
    data: &'a ProgressViewModel,
}

impl<'a> fmt::Display for ProgressView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "Completed {} of {} frameworks ({}%)",
            self.data.completed_count, self.data.total, self.data.percent
        )?;
        for entry in &self.data.completed {
            writeln!(
                f,
                "  {} {:<30} {}",
                "✓".green(),
                entry.title,
                format_date(entry.completed_at).dimmed()
            )?;
        }
        Ok(())
    }
}

impl CreateView for CompletionViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        Box::new(CompletionView { data: self })
    }
}

struct CompletionView<'a> {
    data: &'a CompletionViewModel,
}

impl<'a> fmt::Display for CompletionView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.completed {
            writeln!(f, "{} {} marked complete", "✓".green(), self.data.title)?;
        } else {
            writeln!(f, "{} marked incomplete", self.data.title)?;
        }
        writeln!(f, "Progress: {}%", self.data.percent)
    }
}

// --------------------------------------------------------
// Guide
// --------------------------------------------------------

impl CreateView for GuideViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        Box::new(GuideView { data: self })
    }
}

struct GuideView<'a> {
    data: &'a GuideViewModel,
}

impl<'a> fmt::Display for GuideView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.data.reply)
    }
}

// --------------------------------------------------------
// Init
// --------------------------------------------------------

impl CreateView for InitViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        Box::new(InitView { data: self })
    }
}

struct InitView<'a> {
    data: &'a InitViewModel,
}

impl<'a> fmt::Display for InitView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.created {
            writeln!(f, "Wrote {}", self.data.path)?;
        } else {
            writeln!(f, "Config already exists at {}", self.data.path)?;
        }
        writeln!(f, "  tick_interval_ms = {}", self.data.tick_interval_ms)?;
        writeln!(f, "  default_topic    = {}", self.data.default_topic)?;
        writeln!(f, "  autoplay         = {}", self.data.autoplay)
    }
}
