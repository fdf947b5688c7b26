//! Fixed Indonesian word sets: stopwords and domain-important terms.
//!
//! Both sets are lowercase. A word may sit in both; importance wins for
//! unigram filtering (see `keywords::should_skip`).

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Grammatical filler excluded from keyword results.
static STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    let mut s = HashSet::new();
    // Articles, determiners, prepositions
    for w in &[
        "yang", "di", "ke", "dari", "pada", "dalam", "untuk", "dengan", "oleh",
        "tentang", "seperti", "sebagai", "kepada", "terhadap", "antara", "sampai",
        "hingga", "sejak", "ini", "itu", "tersebut", "para", "sang", "si", "per",
    ] {
        s.insert(*w);
    }
    // Pronouns
    for w in &[
        "saya", "aku", "gue", "gua", "kami", "kita", "anda", "kamu", "lu", "lo",
        "dia", "ia", "mereka", "beliau", "nya", "mu", "ku", "kalian", "sendiri",
    ] {
        s.insert(*w);
    }
    // Common verbs and auxiliaries
    for w in &[
        "ada", "adalah", "merupakan", "menjadi", "jadi", "bisa", "dapat", "akan",
        "sudah", "udah", "telah", "sedang", "lagi", "masih", "belum", "harus",
        "mau", "ingin", "pengen", "buat", "bikin", "punya", "minta",
        "bantu", "coba", "lihat", "tahu", "tau", "bilang", "kata", "pakai", "pake",
    ] {
        s.insert(*w);
    }
    // Question words
    for w in &[
        "apa", "apakah", "siapa", "kapan", "dimana", "mana", "kenapa", "mengapa",
        "bagaimana", "gimana", "berapa", "kok",
    ] {
        s.insert(*w);
    }
    // Number and time words
    for w in &[
        "satu", "dua", "tiga", "empat", "lima", "pertama", "kedua", "banyak",
        "sedikit", "semua", "setiap", "hari", "jam", "menit", "detik", "minggu",
        "bulan", "tahun", "pagi", "siang", "sore", "malam", "kemarin", "besok",
        "sekarang", "tadi", "nanti", "lama", "segera", "cepat",
    ] {
        s.insert(*w);
    }
    // Polite phrases and greetings
    for w in &[
        "mohon", "tolong", "terima", "kasih", "makasih", "thanks", "halo", "hai",
        "selamat", "permisi", "maaf", "pak", "bu", "bapak", "ibu", "kak", "mas",
        "mbak", "min", "admin", "gan", "sis",
    ] {
        s.insert(*w);
    }
    // Conjunctions
    for w in &[
        "dan", "atau", "tapi", "tetapi", "namun", "karena", "karna", "sehingga",
        "jika", "kalau", "kalo", "agar", "supaya", "serta", "lalu", "kemudian",
        "bahwa", "maka", "walaupun", "meskipun", "sedangkan",
    ] {
        s.insert(*w);
    }
    // Fillers and particles
    for w in &[
        "sih", "dong", "deh", "kan", "lah", "pun", "nih", "tuh", "ya", "yah",
        "yg", "dgn", "utk", "aja", "saja", "juga", "hanya", "cuma", "sangat",
        "banget", "sekali", "lebih", "paling", "tidak", "tak", "gak", "ga",
        "nggak", "enggak", "bukan", "woy", "wkwk", "oke", "ok", "iya",
    ] {
        s.insert(*w);
    }
    s
});

/// Domain vocabulary kept even when it is also a stopword, and boosted when ranking.
static IMPORTANT_KEYWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    let mut s = HashSet::new();
    // Network / connectivity
    for w in &[
        "internet", "sinyal", "jaringan", "koneksi", "wifi", "modem", "router",
        "bts", "lemot", "lambat", "putus", "mati", "gangguan", "down", "offline",
        "lag", "loading", "indihome", "fiber",
    ] {
        s.insert(*w);
    }
    // Billing
    for w in &[
        "tagihan", "bayar", "pembayaran", "pulsa", "kuota", "paket", "saldo",
        "biaya", "harga", "refund", "potong", "terpotong", "tarif", "denda",
        "invoice", "transfer",
    ] {
        s.insert(*w);
    }
    // Technical
    for w in &[
        "error", "rusak", "gagal", "aplikasi", "app", "login", "password", "otp",
        "update", "restart", "reset", "bug", "crash", "hang",
    ] {
        s.insert(*w);
    }
    // Account / service
    for w in &[
        "akun", "nomor", "kartu", "sim", "registrasi", "blokir", "terblokir",
        "aktif", "aktivasi", "layanan", "langganan", "berhenti", "pasang",
        "pemasangan", "teknisi",
    ] {
        s.insert(*w);
    }
    // Urgency
    for w in &[
        "urgent", "darurat", "segera", "penting", "cepat", "parah", "total",
        "rugi", "kerugian",
    ] {
        s.insert(*w);
    }
    // Service quality
    for w in &[
        "kecewa", "buruk", "jelek", "komplain", "keluhan", "respon", "pelayanan",
        "lama", "ditunggu", "menunggu", "cs",
    ] {
        s.insert(*w);
    }
    s
});

/// Whether a lowercase token is grammatical filler.
pub fn is_stopword(token: &str) -> bool {
    STOPWORDS.contains(token)
}

/// Whether a lowercase token is domain vocabulary.
pub fn is_important(token: &str) -> bool {
    IMPORTANT_KEYWORDS.contains(token)
}
