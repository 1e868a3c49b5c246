//! Synthetic customer data for a fresh database

use rand::Rng;

/// Number of customers written on first startup
pub const SEED_COUNT: usize = 1000;

const FIRST_NAMES: &[&str] = &[
    "Ahmad", "Budi", "Citra", "Dewi", "Eko", "Fitri", "Gunawan", "Hana", "Irfan", "Joko",
    "Kartika", "Lukman", "Maya", "Nadia", "Omar", "Putri", "Qori", "Rahmat", "Siti", "Taufik",
    "Umi", "Vina", "Wahyu", "Xena", "Yusuf", "Zahra", "Andika", "Bella", "Chandra", "Diana",
];

const LAST_NAMES: &[&str] = &[
    "Pratama", "Wijaya", "Santoso", "Kusuma", "Hidayat", "Rahman", "Saputra", "Putra", "Lestari",
    "Wati", "Permana", "Sutanto", "Hartono", "Susanto", "Nugroho", "Setiawan", "Kurniawan",
    "Utama", "Maulana", "Hakim",
];

const CITIES: &[&str] = &[
    "Jakarta", "Surabaya", "Bandung", "Medan", "Semarang", "Makassar", "Palembang", "Tangerang",
    "Depok", "Bekasi", "Malang", "Yogyakarta", "Solo", "Denpasar", "Bogor",
];

const STREETS: &[&str] = &[
    "Jl. Merdeka", "Jl. Sudirman", "Jl. Gatot Subroto", "Jl. Ahmad Yani", "Jl. Diponegoro",
    "Jl. Pahlawan", "Jl. Kartini", "Jl. Veteran", "Jl. Asia Afrika", "Jl. Imam Bonjol",
];

/// Generate `count` independent random `(nama, alamat)` pairs. Duplicates
/// are possible.
pub fn synthetic_customers(count: usize) -> Vec<(String, String)> {
    let mut rng = rand::thread_rng();

    (0..count)
        .map(|_| {
            let nama = format!(
                "{} {}",
                FIRST_NAMES[rng.gen_range(0..FIRST_NAMES.len())],
                LAST_NAMES[rng.gen_range(0..LAST_NAMES.len())]
            );
            let alamat = format!(
                "{} No. {}, {}",
                STREETS[rng.gen_range(0..STREETS.len())],
                rng.gen_range(1..=200),
                CITIES[rng.gen_range(0..CITIES.len())]
            );
            (nama, alamat)
        })
        .collect()
}
