use crate::models::Statistics;

pub fn render_home(stats: &Statistics) -> String {
    let top_mood = stats
        .most_common_mood
        .as_deref()
        .map(capitalize)
        .unwrap_or_else(|| "None".to_string());
    HOME_HTML
        .replace("{{STYLE}}", SHARED_STYLE)
        .replace("{{TOTAL}}", &stats.total_entries.to_string())
        .replace("{{AVG_STRESS}}", &stats.average_stress_level.to_string())
        .replace("{{TOP_MOOD}}", &top_mood)
        .replace("{{TREND}}", &stats.recent_trend)
}

pub fn render_entry() -> String {
    ENTRY_HTML.replace("{{STYLE}}", SHARED_STYLE)
}

pub fn render_history() -> String {
    HISTORY_HTML.replace("{{STYLE}}", SHARED_STYLE)
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

const SHARED_STYLE: &str = r#"
    body {
      margin: 0;
      min-height: 100vh;
      background: linear-gradient(135deg, #f8f3e6, #ffe9d4 60%, #f9f2e9 100%);
      color: #2b2a28;
      font-family: "Trebuchet MS", sans-serif;
      display: grid;
      place-items: start center;
      padding: 32px 18px 48px;
    }
    .app {
      width: min(760px, 100%);
      background: rgba(255, 255, 255, 0.9);
      border-radius: 24px;
      box-shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
      padding: 32px;
      display: grid;
      gap: 24px;
    }
    h1 { margin: 0; font-size: 2rem; }
    .subtitle { margin: 0; color: #5f5c57; }
    nav { display: flex; gap: 14px; }
    nav a { color: #2f4858; font-weight: 600; text-decoration: none; }
    nav a:hover { text-decoration: underline; }
    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
      gap: 14px;
    }
    .stat {
      background: white;
      border-radius: 16px;
      padding: 16px;
      border: 1px solid rgba(47, 72, 88, 0.08);
    }
    .stat .label {
      display: block;
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.1em;
      color: #8b857d;
    }
    .stat .value { display: block; font-size: 1.5rem; font-weight: 600; color: #2f4858; }
    button {
      border: none;
      border-radius: 999px;
      padding: 12px 20px;
      font-size: 1rem;
      font-weight: 600;
      cursor: pointer;
      background: #ff6b4a;
      color: white;
    }
    button.secondary { background: #2f4858; }
    .status { min-height: 1.2em; color: #6b645d; }
    .status[data-type="error"] { color: #c63b2b; }
    .status[data-type="ok"] { color: #2d7a4b; }
    label { font-weight: 600; }
    select, textarea, input[type="range"] { width: 100%; font: inherit; }
    select, textarea {
      border: 1px solid rgba(47, 72, 88, 0.25);
      border-radius: 10px;
      padding: 10px;
      background: white;
    }
    .form-group { display: grid; gap: 6px; }
    .checkbox-group { display: flex; flex-wrap: wrap; gap: 10px; }
    .checkbox-group label { font-weight: 400; }
"#;

const HOME_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Mood Color Journal</title>
  <style>{{STYLE}}</style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Mood Color Journal</h1>
      <p class="subtitle">Track your daily emotions through colors.</p>
    </header>
    <nav>
      <a href="/">Home</a>
      <a href="/entry">New Entry</a>
      <a href="/history">History</a>
    </nav>
    <section>
      <b>How it works:</b>
      <ol>
        <li>Complete your daily mood questionnaire</li>
        <li>Receive your personalized mood color</li>
        <li>View your emotional journey over time</li>
      </ol>
    </section>
    <section class="panel">
      <div class="stat">
        <span class="label">Total Entries</span>
        <span class="value">{{TOTAL}}</span>
      </div>
      <div class="stat">
        <span class="label">Avg Stress Level</span>
        <span class="value">{{AVG_STRESS}}</span>
      </div>
      <div class="stat">
        <span class="label">Most Common Mood</span>
        <span class="value">{{TOP_MOOD}}</span>
      </div>
      <div class="stat">
        <span class="label">Recent Trend</span>
        <span class="value">{{TREND}}</span>
      </div>
    </section>
    <section>
      <a href="/entry"><button type="button">Create Today's Entry</button></a>
    </section>
  </main>
</body>
</html>
"#;

const ENTRY_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Daily Mood Entry</title>
  <style>{{STYLE}}
    .color-display { display: flex; align-items: center; gap: 16px; }
    .color-circle {
      width: 72px;
      height: 72px;
      border-radius: 50%;
      border: 3px solid white;
      box-shadow: 0 8px 20px rgba(47, 72, 88, 0.25);
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Daily Mood Entry</h1>
      <p class="subtitle">Take a moment to reflect on your day.</p>
    </header>
    <nav>
      <a href="/">Home</a>
      <a href="/entry">New Entry</a>
      <a href="/history">History</a>
    </nav>

    <form id="mood-form">
      <div class="form-group">
        <label for="overallMood">How are you feeling overall?</label>
        <select id="overallMood" name="overallMood"></select>
      </div>
      <div class="form-group">
        <label for="energyLevel">What's your energy level?</label>
        <select id="energyLevel" name="energyLevel"></select>
      </div>
      <div class="form-group">
        <label>Who did you interact with today?</label>
        <div id="socialInteractions" class="checkbox-group"></div>
      </div>
      <div class="form-group">
        <label for="stressLevel">Stress Level: <span id="stress-value">5</span>/10</label>
        <input type="range" id="stressLevel" name="stressLevel" min="1" max="10" value="5" />
      </div>
      <div class="form-group">
        <label for="primaryThoughts">What dominated your thoughts today?</label>
        <select id="primaryThoughts" name="primaryThoughts"></select>
      </div>
      <div class="form-group">
        <label for="gratitude">What are you grateful for today?</label>
        <textarea id="gratitude" rows="2"></textarea>
      </div>
      <div class="form-group">
        <label for="highlight">What was the highlight of your day?</label>
        <textarea id="highlight" rows="2"></textarea>
      </div>
      <div class="form-group">
        <label for="intention">What's your intention for tomorrow?</label>
        <textarea id="intention" rows="2"></textarea>
      </div>
      <button type="submit">Save Entry</button>
    </form>

    <div class="status" id="status"></div>

    <section id="result" hidden>
      <h3>Your Mood Color</h3>
      <div class="color-display">
        <div class="color-circle" id="color-circle"></div>
        <div>
          <h4 id="color-name"></h4>
          <p id="color-description"></p>
        </div>
      </div>
      <p><a href="/history">View History</a></p>
    </section>
  </main>

  <script>
    const statusEl = document.getElementById('status');
    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const fillSelect = (id, options, placeholder) => {
      const select = document.getElementById(id);
      select.innerHTML = '';
      const empty = document.createElement('option');
      empty.value = '';
      empty.textContent = placeholder;
      select.appendChild(empty);
      (options || []).forEach((option) => {
        const el = document.createElement('option');
        el.value = option.value;
        el.textContent = option.label;
        select.appendChild(el);
      });
    };

    const loadOptions = async () => {
      const res = await fetch('/api/options');
      if (!res.ok) throw new Error('Unable to load mood options');
      const options = await res.json();
      fillSelect('overallMood', options.overallMood, 'Choose your mood...');
      fillSelect('energyLevel', options.energyLevel, 'Select energy level...');
      fillSelect('primaryThoughts', options.primaryThoughts, 'Select primary focus...');
      const social = document.getElementById('socialInteractions');
      social.innerHTML = '';
      (options.socialInteractions || []).forEach((option) => {
        const label = document.createElement('label');
        const box = document.createElement('input');
        box.type = 'checkbox';
        box.value = option.value;
        label.appendChild(box);
        label.appendChild(document.createTextNode(' ' + option.label));
        social.appendChild(label);
      });
    };

    const slider = document.getElementById('stressLevel');
    slider.addEventListener('input', () => {
      document.getElementById('stress-value').textContent = slider.value;
    });

    document.getElementById('mood-form').addEventListener('submit', async (event) => {
      event.preventDefault();
      setStatus('Saving...', '');
      const social = Array.from(
        document.querySelectorAll('#socialInteractions input:checked')
      ).map((box) => box.value);
      const payload = {
        overallMood: document.getElementById('overallMood').value,
        energyLevel: document.getElementById('energyLevel').value,
        socialInteractions: social,
        stressLevel: parseInt(slider.value, 10),
        primaryThoughts: document.getElementById('primaryThoughts').value,
        gratitude: document.getElementById('gratitude').value,
        highlight: document.getElementById('highlight').value,
        intention: document.getElementById('intention').value
      };
      const res = await fetch('/api/entries', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify(payload)
      });
      if (!res.ok) {
        const body = await res.json().catch(() => null);
        const messages = body && body.error && body.error.messages;
        setStatus(messages ? messages.join(', ') : 'Failed to save mood entry', 'error');
        return;
      }
      const entry = await res.json();
      document.getElementById('color-circle').style.backgroundColor = entry.moodColor;
      document.getElementById('color-name').textContent = entry.colorName;
      document.getElementById('color-description').textContent = entry.colorDescription;
      document.getElementById('result').hidden = false;
      setStatus('Mood entry saved successfully!', 'ok');
      event.target.reset();
      document.getElementById('stress-value').textContent = '5';
    });

    loadOptions().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;

const HISTORY_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Mood History</title>
  <style>{{STYLE}}
    .filters { display: flex; flex-wrap: wrap; gap: 14px; align-items: end; }
    .entry-card {
      background: white;
      border-radius: 16px;
      padding: 16px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 8px;
    }
    .entry-header { display: flex; justify-content: space-between; align-items: center; }
    .entry-mood-color {
      width: 36px;
      height: 36px;
      border-radius: 50%;
      border: 2px solid white;
      box-shadow: 0 6px 14px rgba(47, 72, 88, 0.2);
    }
    .entries { display: grid; gap: 14px; }
    .no-entries { color: #6b645d; }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Mood History</h1>
      <p class="subtitle">Explore your emotional journey through colors and patterns.</p>
    </header>
    <nav>
      <a href="/">Home</a>
      <a href="/entry">New Entry</a>
      <a href="/history">History</a>
    </nav>

    <section class="filters">
      <div class="form-group">
        <label for="mood-filter">Mood</label>
        <select id="mood-filter"><option value="">All Moods</option></select>
      </div>
      <div class="form-group">
        <label for="date-range">Date Range</label>
        <select id="date-range">
          <option value="all">All Time</option>
          <option value="week">Last 7 Days</option>
          <option value="month">Last 30 Days</option>
        </select>
      </div>
      <button type="button" class="secondary" id="clear-filters">Clear Filters</button>
    </section>

    <section class="panel" id="palette-stats" hidden>
      <div class="stat">
        <span class="label">Total Entries</span>
        <span class="value" id="stat-total">0</span>
      </div>
      <div class="stat">
        <span class="label">Unique Colors</span>
        <span class="value" id="stat-colors">0</span>
      </div>
      <div class="stat">
        <span class="label">Avg Stress</span>
        <span class="value" id="stat-stress">0</span>
      </div>
    </section>

    <section class="entries" id="entries"></section>
    <div class="status" id="status"></div>
  </main>

  <script>
    const statusEl = document.getElementById('status');
    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const moodFilter = document.getElementById('mood-filter');
    const dateRange = document.getElementById('date-range');

    const renderEntries = (entries) => {
      const container = document.getElementById('entries');
      container.innerHTML = '';
      if (!entries.length) {
        const empty = document.createElement('div');
        empty.className = 'no-entries';
        empty.textContent =
          'No mood entries found. Complete your first daily entry to start tracking!';
        container.appendChild(empty);
        document.getElementById('palette-stats').hidden = true;
        return;
      }

      entries.forEach((entry) => {
        const card = document.createElement('div');
        card.className = 'entry-card';
        const date = new Date(entry.date).toLocaleDateString('en-US', {
          weekday: 'long', year: 'numeric', month: 'long', day: 'numeric'
        });
        const header = document.createElement('div');
        header.className = 'entry-header';
        const dateEl = document.createElement('strong');
        dateEl.textContent = date;
        const swatch = document.createElement('div');
        swatch.className = 'entry-mood-color';
        swatch.style.backgroundColor = entry.moodColor;
        header.appendChild(dateEl);
        header.appendChild(swatch);
        card.appendChild(header);

        const details = document.createElement('div');
        details.textContent =
          'Mood: ' + entry.colorName +
          ' | Energy: ' + entry.energyLevel +
          ' | Stress: ' + entry.stressLevel + '/10' +
          ' | Focus: ' + entry.primaryThoughts;
        card.appendChild(details);

        if ((entry.socialInteractions || []).length) {
          const social = document.createElement('div');
          social.textContent = 'Social: ' + entry.socialInteractions.join(', ');
          card.appendChild(social);
        }
        if (entry.gratitude) {
          const gratitude = document.createElement('div');
          gratitude.textContent = 'Grateful for: ' + entry.gratitude;
          card.appendChild(gratitude);
        }
        if (entry.highlight) {
          const highlight = document.createElement('div');
          highlight.textContent = 'Highlight: ' + entry.highlight;
          card.appendChild(highlight);
        }
        container.appendChild(card);
      });

      const colors = [...new Set(entries.map((entry) => entry.moodColor))];
      const avgStress =
        entries.reduce((sum, entry) => sum + entry.stressLevel, 0) / entries.length;
      document.getElementById('stat-total').textContent = entries.length;
      document.getElementById('stat-colors').textContent = colors.length;
      document.getElementById('stat-stress').textContent = avgStress.toFixed(1);
      document.getElementById('palette-stats').hidden = false;
    };

    const loadFiltered = async () => {
      const params = new URLSearchParams();
      if (moodFilter.value) params.set('mood', moodFilter.value);
      params.set('dateRange', dateRange.value);
      const res = await fetch('/api/entries?' + params.toString());
      if (!res.ok) throw new Error('Failed to load mood history');
      renderEntries(await res.json());
    };

    const loadData = async () => {
      const res = await fetch('/api/history');
      if (!res.ok) throw new Error('Failed to load mood history');
      const data = await res.json();
      (data.options.overallMood || []).forEach((option) => {
        const el = document.createElement('option');
        el.value = option.value;
        el.textContent = option.label.split(' - ')[0];
        moodFilter.appendChild(el);
      });
      renderEntries(data.entries);
    };

    moodFilter.addEventListener('change', () => loadFiltered().catch((err) => setStatus(err.message, 'error')));
    dateRange.addEventListener('change', () => loadFiltered().catch((err) => setStatus(err.message, 'error')));
    document.getElementById('clear-filters').addEventListener('click', () => {
      moodFilter.value = '';
      dateRange.value = 'all';
      loadFiltered().catch((err) => setStatus(err.message, 'error'));
    });

    loadData().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
