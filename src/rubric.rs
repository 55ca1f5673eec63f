use clap::ValueEnum;

/// Which scoring rubric the instruction embeds.
///
/// The tag travels with the whole pipeline: it selects the instruction
/// wording, the wire shape of the technique lists, and the presentation
/// bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RubricVariant {
    /// Four weighted criteria; technique lists are bare strings
    Basic,
    /// Five weighted criteria with stricter scoring bands; technique
    /// findings carry rationales
    Advanced,
}

impl RubricVariant {
    pub fn name(self) -> &'static str {
        match self {
            RubricVariant::Basic => "basic",
            RubricVariant::Advanced => "advanced",
        }
    }
}

/// The four prompt engineering techniques the evaluator classifies against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Technique {
    ZeroShot,
    FewShot,
    ChainOfThought,
    TreeOfThoughts,
}

impl Technique {
    pub const ALL: [Technique; 4] = [
        Technique::ZeroShot,
        Technique::FewShot,
        Technique::ChainOfThought,
        Technique::TreeOfThoughts,
    ];

    /// Display name as used inside the rubric text.
    pub fn name(self) -> &'static str {
        match self {
            Technique::ZeroShot => "Zero-Shot",
            Technique::FewShot => "Few-Shot",
            Technique::ChainOfThought => "Chain of Thought",
            Technique::TreeOfThoughts => "Tree of Thoughts",
        }
    }

    /// Built-in example prompt demonstrating the technique.
    pub fn sample_prompt(self) -> &'static str {
        match self {
            Technique::ZeroShot => SAMPLE_ZERO_SHOT,
            Technique::FewShot => SAMPLE_FEW_SHOT,
            Technique::ChainOfThought => SAMPLE_CHAIN_OF_THOUGHT,
            Technique::TreeOfThoughts => SAMPLE_TREE_OF_THOUGHTS,
        }
    }
}

/// Evaluator persona sent as the system message.
pub fn system_prompt(rubric: RubricVariant) -> &'static str {
    match rubric {
        RubricVariant::Basic => {
            "Kamu adalah ahli prompt engineering yang fokus pada 4 teknik utama: \
             Zero-Shot, Few-Shot, Chain of Thought, dan Tree of Thoughts. \
             Evaluasi berdasarkan kesesuaian teknik dengan kebutuhan."
        }
        RubricVariant::Advanced => {
            "Kamu adalah evaluator prompt engineering senior yang menilai dengan ketat. \
             Fokus pada 4 teknik utama: Zero-Shot, Few-Shot, Chain of Thought, dan \
             Tree of Thoughts. Jangan ragu memberi skor rendah untuk prompt yang lemah."
        }
    }
}

/// Build the full instruction for the model: rubric, required JSON shape,
/// scoring weights, and the raw prompt embedded verbatim between `"""`
/// delimiters so the model can tell rubric text from content to evaluate.
///
/// Deterministic: the same (prompt, rubric) pair always yields the same
/// string.
pub fn build_instruction(raw_prompt: &str, rubric: RubricVariant) -> String {
    let template = match rubric {
        RubricVariant::Basic => BASIC_INSTRUCTION,
        RubricVariant::Advanced => ADVANCED_INSTRUCTION,
    };
    template.replace("{prompt}", raw_prompt)
}

const BASIC_INSTRUCTION: &str = r#"Analisis prompt berikut berdasarkan 4 teknik utama prompt engineering:

1. Zero-Shot: Instruksi langsung tanpa contoh
2. Few-Shot: Menyertakan contoh untuk panduan format/output
3. Chain of Thought: Meminta reasoning step-by-step
4. Tree of Thoughts: Eksplorasi multiple paths/opsi

Berikan respons dalam format JSON:
{
    "skor": <0-100>,
    "jenis_tugas": "<kategorisasi tugas>",
    "teknik_sesuai": ["teknik yang cocok untuk jenis tugas ini"],
    "teknik_ditemukan": ["teknik yang sudah digunakan"],
    "teknik_disarankan": ["teknik yang sebaiknya ditambahkan"],
    "kelebihan": ["poin kuat prompt"],
    "kekurangan": ["poin lemah prompt"],
    "rekomendasi": ["saran perbaikan spesifik"],
    "versi_perbaikan": "prompt yang sudah diperbaiki"
}

Kriteria penilaian:
- Kesesuaian teknik dengan jenis tugas (40%)
- Kejelasan instruksi (30%)
- Struktur dan organisasi (20%)
- Kelengkapan konteks (10%)

PENTING: Sesuaikan teknik dengan kebutuhan. Tidak semua prompt butuh teknik kompleks.

Prompt yang dianalisis:
"""
{prompt}
"""

Respons dalam bahasa Indonesia."#;

const ADVANCED_INSTRUCTION: &str = r#"Analisis prompt berikut berdasarkan 4 teknik utama prompt engineering:

1. Zero-Shot: Instruksi langsung tanpa contoh
2. Few-Shot: Menyertakan contoh untuk panduan format/output
3. Chain of Thought: Meminta reasoning step-by-step
4. Tree of Thoughts: Eksplorasi multiple paths/opsi

Berikan respons dalam format JSON:
{
    "skor": <0-100>,
    "jenis_tugas": "<kategorisasi tugas>",
    "teknik_sesuai": ["teknik yang cocok untuk jenis tugas ini"],
    "teknik_ditemukan": [{"teknik": "<nama teknik>", "alasan": "<mengapa teknik ini terdeteksi>"}],
    "teknik_disarankan": [{"teknik": "<nama teknik>", "alasan": "<mengapa teknik ini akan membantu>"}],
    "kelebihan": ["poin kuat prompt"],
    "kekurangan": ["poin lemah prompt"],
    "rekomendasi": ["saran perbaikan spesifik"],
    "versi_perbaikan": "prompt yang sudah diperbaiki"
}

Kriteria penilaian:
- Kesesuaian teknik dengan jenis tugas (30%)
- Kejelasan instruksi (25%)
- Struktur dan organisasi (20%)
- Kelengkapan konteks (15%)
- Spesifikasi format output (10%)

Panduan skor: 90-100 hanya untuk prompt yang nyaris sempurna, 80-89 sangat bagus,
65-79 baik, 50-64 cukup, di bawah 50 perlu perbaikan menyeluruh. Nilai dengan ketat.

Prompt yang dianalisis:
"""
{prompt}
"""

Respons dalam bahasa Indonesia."#;

const SAMPLE_ZERO_SHOT: &str = "Jelaskan konsep blockchain dalam 3 paragraf untuk pemula.";

const SAMPLE_FEW_SHOT: &str = r#"Ubah deskripsi produk menjadi caption Instagram yang menarik.

Contoh 1:
Produk: Tas kanvas ramah lingkungan
Caption: Eco-friendly canvas bag 🌱 Style meets sustainability! Perfect untuk daily adventures. #EcoFashion #SustainableLiving

Contoh 2:
Produk: Botol minum stainless steel
Caption: Stay hydrated in style! 💧 Our stainless steel bottle keeps drinks cold for 24hrs. #Hydration #EcoFriendly

Sekarang buatkan untuk:
Produk: Sepatu sneakers dari bahan daur ulang"#;

const SAMPLE_CHAIN_OF_THOUGHT: &str = r#"Saya punya budget Rp 5.000.000 untuk liburan 4 hari 3 malam di Bali untuk 2 orang.

Bantu saya buat rencana budget detail. Pikirkan step by step:
1. Hitung alokasi untuk setiap kategori (transport, hotel, makan, aktivitas)
2. Cari opsi yang sesuai budget untuk setiap kategori
3. Hitung total dan pastikan tidak melebihi budget
4. Berikan rekomendasi final dengan breakdown biaya"#;

const SAMPLE_TREE_OF_THOUGHTS: &str = r#"Saya ingin memulai bisnis online dengan modal Rp 10 juta.

Eksplorasi 3 ide bisnis yang berbeda:
1. E-commerce fashion
2. Kursus online
3. Jasa digital marketing

Untuk setiap ide:
- Jelaskan konsep bisnis
- Breakdown modal yang dibutuhkan
- Analisis target market
- Proyeksi revenue 6 bulan
- List risiko dan mitigasi

Berikan rekomendasi bisnis mana yang paling potensial."#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_instruction_is_deterministic() {
        let first = build_instruction("Jelaskan fotosintesis", RubricVariant::Advanced);
        let second = build_instruction("Jelaskan fotosintesis", RubricVariant::Advanced);
        assert_eq!(first, second);
    }

    #[test]
    fn test_build_instruction_embeds_prompt_verbatim() {
        let prompt = "Ringkas artikel ini.\n\nDengan format bullet.";
        let instruction = build_instruction(prompt, RubricVariant::Basic);
        assert!(instruction.contains(prompt));
        assert!(instruction.contains("\"\"\""));
    }

    #[test]
    fn test_basic_instruction_uses_bare_string_lists() {
        let instruction = build_instruction("x", RubricVariant::Basic);
        assert!(instruction.contains("(40%)"));
        assert!(!instruction.contains("alasan"));
    }

    #[test]
    fn test_advanced_instruction_requires_rationales() {
        let instruction = build_instruction("x", RubricVariant::Advanced);
        assert!(instruction.contains("(30%)"));
        assert!(instruction.contains("\"alasan\""));
        assert!(instruction.contains("Spesifikasi format output"));
    }

    #[test]
    fn test_variants_produce_different_instructions() {
        let basic = build_instruction("x", RubricVariant::Basic);
        let advanced = build_instruction("x", RubricVariant::Advanced);
        assert_ne!(basic, advanced);
    }

    #[test]
    fn test_instruction_names_all_required_keys() {
        for rubric in [RubricVariant::Basic, RubricVariant::Advanced] {
            let instruction = build_instruction("x", rubric);
            for key in [
                "skor",
                "jenis_tugas",
                "teknik_sesuai",
                "teknik_ditemukan",
                "teknik_disarankan",
                "kelebihan",
                "kekurangan",
                "rekomendasi",
                "versi_perbaikan",
            ] {
                assert!(instruction.contains(key), "{key} missing from {} rubric", rubric.name());
            }
        }
    }

    #[test]
    fn test_system_prompts_differ_per_variant() {
        assert_ne!(
            system_prompt(RubricVariant::Basic),
            system_prompt(RubricVariant::Advanced)
        );
    }

    #[test]
    fn test_every_technique_has_a_distinct_sample() {
        for technique in Technique::ALL {
            assert!(!technique.sample_prompt().trim().is_empty());
        }
        let samples: Vec<_> = Technique::ALL.iter().map(|t| t.sample_prompt()).collect();
        for (i, sample) in samples.iter().enumerate() {
            for other in &samples[i + 1..] {
                assert_ne!(sample, other);
            }
        }
    }

    #[test]
    fn test_technique_names() {
        assert_eq!(Technique::ZeroShot.name(), "Zero-Shot");
        assert_eq!(Technique::ChainOfThought.name(), "Chain of Thought");
    }
}
