use chrono::NaiveDate;

// Additive byte checksum over subject + date + shared secret. This is NOT a
// MAC; existing report links depend on the exact scheme, so it is kept
// byte-compatible. The consuming report endpoint decides how far to trust it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReportAccessToken(String);

impl ReportAccessToken {
    pub fn derive(subject_id: &str, report_date: NaiveDate, secret: &str) -> Self {
        let material = format!(
            "{}{}{}",
            subject_id,
            report_date.format("%Y-%m-%d"),
            secret
        );

        let checksum = material
            .bytes()
            .fold(0u32, |acc, byte| acc.wrapping_add(u32::from(byte)));

        Self(format!("{checksum:08x}"))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}
