//! Filesystem-backed JSON persistence for the Daftar ledger store.
//!
//! The whole ledger lives in one JSON document. Mutations are serialized
//! behind an interior mutex and written atomically (temp file + rename), so
//! each `LedgerStore` call is atomic and the one-open-period check-and-insert
//! cannot be raced from within the process. The on-disk file is reloaded
//! inside the lock before every mutation, so a handle picks up state
//! committed through other handles on the same file.

use std::{
    collections::HashMap,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
    sync::{Mutex, MutexGuard},
};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use daftar_core::{CoreError, LedgerStore};
use daftar_domain::{
    DailySale, Expense, OwnerId, Period, PeriodStatus, PeriodTotals, Purchase, ReminderSetting,
};

const LEDGER_FILE: &str = "ledger.json";
const TMP_SUFFIX: &str = "tmp";

/// Serialized shape of the ledger document.
#[derive(Debug, Default, Serialize, Deserialize)]
struct LedgerFile {
    #[serde(default)]
    owners: Vec<OwnerId>,
    #[serde(default)]
    periods: Vec<Period>,
    #[serde(default)]
    sales: Vec<DailySale>,
    #[serde(default)]
    purchases: Vec<Purchase>,
    #[serde(default)]
    expenses: Vec<Expense>,
    #[serde(default)]
    reminders: HashMap<String, ReminderSetting>,
    #[serde(default)]
    last_period_id: u64,
}

/// JSON-file implementation of [`LedgerStore`].
pub struct JsonLedgerStore {
    path: PathBuf,
    state: Mutex<LedgerFile>,
}

impl JsonLedgerStore {
    /// Opens (or initializes) the ledger file under `data_dir`.
    pub fn open(data_dir: impl AsRef<Path>) -> Result<Self, CoreError> {
        let dir = data_dir.as_ref();
        fs::create_dir_all(dir)?;
        let path = dir.join(LEDGER_FILE);
        let state = if path.exists() {
            load_file(&path)?
        } else {
            let empty = LedgerFile::default();
            persist(&path, &empty)?;
            empty
        };
        Ok(Self {
            path,
            state: Mutex::new(state),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock(&self) -> Result<MutexGuard<'_, LedgerFile>, CoreError> {
        self.state
            .lock()
            .map_err(|_| CoreError::Storage("ledger store mutex poisoned".into()))
    }

    fn read<T>(&self, f: impl FnOnce(&LedgerFile) -> T) -> Result<T, CoreError> {
        let state = self.lock()?;
        Ok(f(&state))
    }

    /// Runs a mutation against freshly loaded state and persists the result
    /// before releasing the lock. A failed mutation leaves the file as-is.
    fn mutate<T>(
        &self,
        apply: impl FnOnce(&mut LedgerFile) -> Result<T, CoreError>,
    ) -> Result<T, CoreError> {
        let mut state = self.lock()?;
        if self.path.exists() {
            *state = load_file(&self.path)?;
        }
        let value = apply(&mut state)?;
        persist(&self.path, &state)?;
        Ok(value)
    }
}

impl LedgerStore for JsonLedgerStore {
    fn ensure_owner(&self, owner: &OwnerId) -> Result<(), CoreError> {
        self.mutate(|file| {
            if !file.owners.contains(owner) {
                file.owners.push(owner.clone());
            }
            Ok(())
        })
    }

    fn get_open_period(&self, owner: &OwnerId) -> Result<Option<Period>, CoreError> {
        self.read(|file| {
            file.periods
                .iter()
                .filter(|p| p.owner == *owner && p.is_open())
                .max_by_key(|p| p.id)
                .cloned()
        })
    }

    fn get_period(&self, period_id: u64) -> Result<Option<Period>, CoreError> {
        self.read(|file| file.periods.iter().find(|p| p.id == period_id).cloned())
    }

    fn create_period(
        &self,
        owner: &OwnerId,
        start_date: NaiveDate,
        end_date: NaiveDate,
        opening_stock_cost: i64,
    ) -> Result<Period, CoreError> {
        self.mutate(|file| {
            if file
                .periods
                .iter()
                .any(|p| p.owner == *owner && p.is_open())
            {
                return Err(CoreError::Conflict(format!(
                    "owner `{owner}` already has an open period"
                )));
            }
            file.last_period_id += 1;
            let period = Period {
                id: file.last_period_id,
                owner: owner.clone(),
                start_date,
                end_date,
                opening_stock_cost,
                closing_stock_cost: None,
                status: PeriodStatus::Open,
            };
            file.periods.push(period.clone());
            Ok(period)
        })
    }

    fn set_opening_stock(&self, period_id: u64, opening_stock_cost: i64) -> Result<(), CoreError> {
        self.mutate(|file| {
            let period = find_period_mut(file, period_id)?;
            period.opening_stock_cost = opening_stock_cost;
            Ok(())
        })
    }

    fn close_period(&self, period_id: u64, closing_stock_cost: i64) -> Result<Period, CoreError> {
        self.mutate(|file| {
            let period = find_period_mut(file, period_id)?;
            if !period.is_open() {
                return Err(CoreError::Conflict(format!(
                    "period {period_id} is already closed"
                )));
            }
            period.closing_stock_cost = Some(closing_stock_cost);
            period.status = PeriodStatus::Closed;
            Ok(period.clone())
        })
    }

    fn upsert_daily_sale(
        &self,
        owner: &OwnerId,
        period_id: u64,
        date: NaiveDate,
        cash_amount: i64,
        card_amount: i64,
    ) -> Result<(), CoreError> {
        self.mutate(|file| {
            if let Some(row) = file
                .sales
                .iter_mut()
                .find(|s| s.owner == *owner && s.period_id == period_id && s.date == date)
            {
                row.cash_amount = cash_amount;
                row.card_amount = card_amount;
            } else {
                file.sales.push(DailySale {
                    owner: owner.clone(),
                    period_id,
                    date,
                    cash_amount,
                    card_amount,
                });
            }
            Ok(())
        })
    }

    fn append_purchase(&self, purchase: &Purchase) -> Result<(), CoreError> {
        self.mutate(|file| {
            file.purchases.push(purchase.clone());
            Ok(())
        })
    }

    fn append_expense(&self, expense: &Expense) -> Result<(), CoreError> {
        self.mutate(|file| {
            file.expenses.push(expense.clone());
            Ok(())
        })
    }

    fn sum_totals(&self, owner: &OwnerId, period_id: u64) -> Result<PeriodTotals, CoreError> {
        self.read(|file| {
            let mut totals = PeriodTotals::default();
            for sale in file
                .sales
                .iter()
                .filter(|s| s.owner == *owner && s.period_id == period_id)
            {
                totals.cash += sale.cash_amount;
                totals.card += sale.card_amount;
            }
            for purchase in file
                .purchases
                .iter()
                .filter(|p| p.owner == *owner && p.period_id == period_id)
            {
                totals.purchases += purchase.total_cost;
            }
            for expense in file
                .expenses
                .iter()
                .filter(|e| e.owner == *owner && e.period_id == period_id)
            {
                totals.expenses += expense.amount;
            }
            totals
        })
    }

    fn get_reminder(&self, owner: &OwnerId) -> Result<ReminderSetting, CoreError> {
        // lazy creation: first read persists the defaults
        self.mutate(|file| {
            Ok(*file
                .reminders
                .entry(owner.as_str().to_string())
                .or_insert_with(ReminderSetting::default))
        })
    }

    fn set_reminder(&self, owner: &OwnerId, setting: &ReminderSetting) -> Result<(), CoreError> {
        self.mutate(|file| {
            file.reminders.insert(owner.as_str().to_string(), *setting);
            Ok(())
        })
    }
}

fn find_period_mut(file: &mut LedgerFile, period_id: u64) -> Result<&mut Period, CoreError> {
    file.periods
        .iter_mut()
        .find(|p| p.id == period_id)
        .ok_or_else(|| CoreError::NotFound(format!("period {period_id}")))
}

fn load_file(path: &Path) -> Result<LedgerFile, CoreError> {
    let data = fs::read_to_string(path)?;
    serde_json::from_str(&data).map_err(|err| CoreError::Serde(err.to_string()))
}

fn persist(path: &Path, file: &LedgerFile) -> Result<(), CoreError> {
    let json =
        serde_json::to_string_pretty(file).map_err(|err| CoreError::Serde(err.to_string()))?;
    let tmp = tmp_path(path);
    write_atomic(&tmp, &json)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), CoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
