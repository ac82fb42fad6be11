//! User-facing text shown by the controller.

pub const MODEL_NOT_LOADED: &str = "Model belum dimuat. Silakan coba lagi dalam beberapa saat.";
pub const SERVER_UNREACHABLE: &str = "Tidak dapat terhubung ke server. Pastikan backend berjalan.";
pub const RECOMMENDATION_FAILED: &str = "Gagal mendapatkan rekomendasi";
pub const RECOMMENDATION_ERROR_PREFIX: &str = "Terjadi kesalahan saat mengambil rekomendasi: ";

pub const SUBMIT_LABEL: &str = "Dapatkan Rekomendasi";
pub const SUBMIT_BUSY_LABEL: &str = "Memproses...";

pub const PRODUCT_LINK_LABEL: &str = "Lihat Produk";
pub const NO_MATCH_HINT: &str = "Coba ubah preferensi Anda";

pub fn no_match(category: &str) -> String {
    format!("Tidak ada rekomendasi {} yang sesuai", category.to_lowercase())
}
