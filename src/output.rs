use crate::models::{PromptAnalysis, TechniqueFinding};
use crate::rubric::RubricVariant;
use clap::ValueEnum;
use serde::Serialize;

/// Output format options
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

/// One row of the score-band table: the lowest score that earns the label,
/// plus the advisory shown under the report.
#[derive(Debug, Serialize)]
pub struct ScoreBand {
    pub floor: u8,
    pub label: &'static str,
    pub advice: &'static str,
}

/// Band thresholds of the basic rubric: below 50, 50-74, 75 and up.
static BASIC_BANDS: [ScoreBand; 3] = [
    ScoreBand {
        floor: 75,
        label: "Sangat Baik",
        advice: "Prompt sudah kuat. Gunakan versi perbaikan untuk polesan terakhir.",
    },
    ScoreBand {
        floor: 50,
        label: "Cukup Baik",
        advice: "Prompt cukup jelas. Terapkan rekomendasi untuk hasil yang lebih konsisten.",
    },
    ScoreBand {
        floor: 0,
        label: "Perlu Perbaikan",
        advice: "Tulis ulang prompt dengan instruksi dan konteks yang lebih lengkap.",
    },
];

/// Stricter five-band split: below 50, 50-64, 65-79, 80-89, 90 and up.
static ADVANCED_BANDS: [ScoreBand; 5] = [
    ScoreBand {
        floor: 90,
        label: "Istimewa",
        advice: "Prompt hampir sempurna. Pertahankan strukturnya.",
    },
    ScoreBand {
        floor: 80,
        label: "Sangat Bagus",
        advice: "Prompt kuat. Cek teknik yang disarankan untuk penyempurnaan.",
    },
    ScoreBand {
        floor: 65,
        label: "Baik",
        advice: "Prompt solid. Rekomendasi di bawah akan menaikkan kualitas output.",
    },
    ScoreBand {
        floor: 50,
        label: "Cukup",
        advice: "Perjelas instruksi dan tambahkan konteks sesuai rekomendasi.",
    },
    ScoreBand {
        floor: 0,
        label: "Perlu Perbaikan",
        advice: "Gunakan versi perbaikan sebagai titik awal dan susun ulang prompt.",
    },
];

/// Look up the band for a score: first row whose floor the score satisfies.
/// The tables are ordered by descending floor and end at 0, so every score
/// in 0-100 lands in exactly one band.
pub fn band_for(score: u8, rubric: RubricVariant) -> &'static ScoreBand {
    let table: &'static [ScoreBand] = match rubric {
        RubricVariant::Basic => &BASIC_BANDS,
        RubricVariant::Advanced => &ADVANCED_BANDS,
    };

    table
        .iter()
        .find(|band| score >= band.floor)
        .unwrap_or(&table[table.len() - 1])
}

/// Print the analysis in the specified format
pub fn print_analysis(
    analysis: &PromptAnalysis,
    rubric: RubricVariant,
    format: OutputFormat,
    title: &str,
) {
    match format {
        OutputFormat::Plain => print_plain(analysis, rubric, title),
        OutputFormat::Json => print_json(analysis, rubric),
    }
}

fn print_plain(analysis: &PromptAnalysis, rubric: RubricVariant, title: &str) {
    let band = band_for(analysis.score, rubric);

    println!("🎯 {}", title);
    println!();

    println!("📊 HASIL ANALISIS");
    println!("-----------------");
    println!(
        "Skor         : {}/100 {} {}",
        analysis.score,
        meter(analysis.score),
        band.label
    );
    println!("Jenis tugas  : {}", analysis.task_category);
    println!(
        "Teknik sesuai: {}",
        analysis.applicable_techniques.join(", ")
    );
    println!();

    println!("🔍 ANALISIS TEKNIK");
    println!("------------------");
    println!("Teknik yang ditemukan:");
    print_findings(&analysis.found_techniques, "Belum ada teknik spesifik");
    println!("Teknik yang disarankan:");
    print_findings(&analysis.suggested_techniques, "Teknik sudah optimal!");
    println!();

    println!("💬 FEEDBACK");
    println!("-----------");
    println!("Kelebihan:");
    print_items(&analysis.strengths, "Tidak ada");
    println!("Kekurangan:");
    print_items(&analysis.weaknesses, "Tidak ada kekurangan signifikan!");
    println!("Rekomendasi:");
    print_items(&analysis.recommendations, "Tidak ada");
    println!();

    println!("🚀 VERSI YANG DISARANKAN");
    println!("------------------------");
    println!("{}", analysis.improved_prompt);
    println!();
    println!("{}", band.advice);
}

fn print_findings(findings: &[TechniqueFinding], empty_note: &str) {
    if findings.is_empty() {
        println!("  • {}", empty_note);
        return;
    }
    for finding in findings {
        if finding.rationale.is_empty() {
            println!("  • {}", finding.name);
        } else {
            println!("  • {}: {}", finding.name, finding.rationale);
        }
    }
}

fn print_items(items: &[String], empty_note: &str) {
    if items.is_empty() {
        println!("  • {}", empty_note);
        return;
    }
    for item in items {
        println!("  • {}", item);
    }
}

/// Twenty-cell progress bar for the score meter.
fn meter(score: u8) -> String {
    const WIDTH: usize = 20;
    let filled = (score as usize * WIDTH) / 100;
    format!("[{}{}]", "█".repeat(filled), "░".repeat(WIDTH - filled))
}

fn print_json(analysis: &PromptAnalysis, rubric: RubricVariant) {
    let report = serde_json::json!({
        "analysis": analysis,
        "band": band_for(analysis.score, rubric),
    });

    match serde_json::to_string_pretty(&report) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing analysis to JSON: {}", e),
    }
}
