mod classify_cases;
mod lifecycle;
#[cfg(feature = "std")]
mod output_std;
