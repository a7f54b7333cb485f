//! Content for every generated file.
//!
//! All bodies are literal text; the README is the only one with substituted
//! values (the project title, the clone URL, and the directory tree block).

use std::path::PathBuf;

use crate::domain::model::ProjectLayout;

/// Renders the full file set for a layout as project-root-relative
/// path/content pairs. Must be called with the finalized layout so the
/// README structure block matches the tree that actually gets created.
pub fn render_files(layout: &ProjectLayout) -> Vec<(PathBuf, String)> {
    let mut files = vec![
        (PathBuf::from(".gitignore"), GITIGNORE.to_string()),
        (PathBuf::from("requirements.txt"), REQUIREMENTS.to_string()),
        (PathBuf::from("README.md"), readme(layout)),
        (
            PathBuf::from("LICENSE"),
            "Add your chosen license text here (e.g., MIT License).".to_string(),
        ),
        (
            PathBuf::from(".github/workflows/python-ci.yml"),
            CI_WORKFLOW.to_string(),
        ),
        (PathBuf::from("src/__init__.py"), String::new()),
        (PathBuf::from("tests/__init__.py"), String::new()),
    ];

    for notebook in NOTEBOOKS {
        files.push((
            PathBuf::from(format!("notebooks/{notebook}")),
            EMPTY_NOTEBOOK.to_string(),
        ));
    }

    for (path, comment) in SOURCE_PLACEHOLDERS {
        files.push((PathBuf::from(path), (*comment).to_string()));
    }

    files
}

const NOTEBOOKS: &[&str] = &[
    "01_data_extraction_and_eda.ipynb",
    "02_arima_modeling.ipynb",
    "03_lstm_modeling.ipynb",
    "04_portfolio_optimization.ipynb",
    "05_strategy_backtesting.ipynb",
];

const SOURCE_PLACEHOLDERS: &[(&str, &str)] = &[
    (
        "src/data_ingestion.py",
        "# Functions for fetching data from yfinance",
    ),
    (
        "src/feature_engineering.py",
        "# Functions for data cleaning and feature creation",
    ),
    (
        "src/modeling.py",
        "# Functions/classes for ARIMA and LSTM models",
    ),
    (
        "src/optimization.py",
        "# Functions for portfolio optimization using PyPortfolioOpt",
    ),
    (
        "src/backtesting.py",
        "# Logic for running the backtest simulation",
    ),
    (
        "src/visualization.py",
        "# Reusable plotting functions",
    ),
    (
        "tests/test_feature_engineering.py",
        "# Unit tests for feature engineering functions",
    ),
];

/// Minimal valid empty notebook: no cells, nbformat 4.2.
const EMPTY_NOTEBOOK: &str =
    "{\n \"cells\": [],\n \"metadata\": {},\n \"nbformat\": 4,\n \"nbformat_minor\": 2\n}";

const GITIGNORE: &str = r#"# Byte-compiled / optimized / DLL files
__pycache__/
*.pyc
*.pyo
*.pyd

# Distribution / packaging
.Python
build/
develop-eggs/
dist/
downloads/
eggs/
.eggs/
lib/
lib64/
parts/
sdist/
var/
wheels/
*.egg-info/
.installed.cfg
*.egg
MANIFEST

# Jupyter Notebook
.ipynb_checkpoints

# Virtual Environments
.env
.venv
env/
venv/
ENV/

# Data files - Crucial for not uploading large datasets
data/

# Model files
models/
*.h5
*.pkl
*.joblib

# IDE / Editor specific
.idea/
.vscode/
*.suo
*.ntvs*
*.njsproj
*.sln
*.sw?
"#;

const REQUIREMENTS: &str = r#"# Core Libraries
pandas
numpy
scikit-learn

# Data Source
yfinance

# Time Series Modeling
statsmodels
pmdarima
tensorflow

# Portfolio Optimization
PyPortfolioOpt

# Visualization
matplotlib
seaborn

# Utilities & Quality
jupyterlab
black
flake8
pytest
"#;

const CI_WORKFLOW: &str = r#"name: Python CI/CD

on:
  push:
    branches: [ main ]
  pull_request:
    branches: [ main ]

jobs:
  build:
    runs-on: ubuntu-latest
    strategy:
      matrix:
        python-version: ["3.9", "3.10"]

    steps:
    - uses: actions/checkout@v3
    - name: Set up Python ${{ matrix.python-version }}
      uses: actions/setup-python@v4
      with:
        python-version: ${{ matrix.python-version }}

    - name: Install dependencies
      run: |
        python -m pip install --upgrade pip
        pip install flake8 pytest
        if [ -f requirements.txt ]; then pip install -r requirements.txt; fi

    - name: Lint with flake8
      run: |
        # stop the build if there are Python syntax errors or undefined names
        flake8 . --count --select=E9,F63,F7,F82 --show-source --statistics
        # exit-zero treats all errors as warnings. The GitHub editor is 127 chars wide
        flake8 . --count --exit-zero --max-complexity=10 --max-line-length=127 --statistics

    - name: Test with pytest
      run: |
        pytest
"#;

fn readme(layout: &ProjectLayout) -> String {
    format!(
        r#"# {title}

## Business Objective
This project, developed for GMF Investments, leverages time series forecasting and Modern Portfolio Theory (MPT) to build an optimized investment portfolio. The primary goal is to enhance portfolio performance by forecasting trends for a high-growth asset (TSLA) and balancing it with stable assets (BND, SPY) to maximize risk-adjusted returns.

---

## Table of Contents
1. [Data Ingestion & EDA](#data-ingestion--eda)
2. [Time Series Modeling](#time-series-modeling)
3. [Portfolio Optimization](#portfolio-optimization)
4. [Strategy Backtesting](#strategy-backtesting)
5. [Results & Recommendation](#results--recommendation)
6. [Project Structure](#project-structure)
7. [How to Run](#how-to-run)

---

## Data Ingestion & EDA
- **Data Source:** `yfinance` API.
- **Assets:** Tesla (TSLA), Vanguard Total Bond Market ETF (BND), S&P 500 ETF (SPY).
- **Period:** July 1, 2015 - July 31, 2025.
- **Key Findings:** Documented key trends, volatility analysis, and stationarity tests (ADF).

## Time Series Modeling
Two models were developed to forecast TSLA's adjusted closing price:
- **Classical Model:** ARIMA/SARIMA (using `statsmodels` and `pmdarima`).
- **Deep Learning Model:** LSTM (using `tensorflow.keras`).
- **Evaluation Metrics:** MAE, RMSE, MAPE.

## Portfolio Optimization
- **Methodology:** Modern Portfolio Theory (MPT).
- **Inputs:**
    - Expected returns for TSLA from the best-performing forecast model.
    - Historical average returns for BND and SPY.
    - Covariance matrix from historical data of all three assets.
- **Output:** The Efficient Frontier, identifying the Maximum Sharpe Ratio and Minimum Volatility portfolios.

## Strategy Backtesting
- **Period:** August 1, 2024 - July 31, 2025.
- **Strategy:** Rebalancing based on the optimized weights derived from the MPT analysis.
- **Benchmark:** A static 60/40 SPY/BND portfolio.
- **Analysis:** Comparison of cumulative returns and Sharpe Ratios.

## Results & Recommendation
A summary of the findings, including the final recommended portfolio weights for GMF's investment committee.

---

## Project Structure
```
{tree}
```

## How to Run
1. Clone the repository:
   ```bash
   git clone https://github.com/your-username/{name}.git
   cd {name}
   ```
2. Create a virtual environment and activate it:
   ```bash
   python -m venv venv
   source venv/bin/activate  # On Windows, use `venv\Scripts\activate`
   ```
3. Install the required dependencies:
   ```bash
   pip install -r requirements.txt
   ```
4. Run the Jupyter notebooks in the `/notebooks` directory to see the workflow.
"#,
        title = layout.display_title(),
        tree = layout.tree(),
        name = layout.name(),
    )
}
