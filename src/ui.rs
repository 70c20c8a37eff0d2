pub fn render_index(date: &str) -> String {
    INDEX_HTML.replace("{{DATE}}", date)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Activity Tracker</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f8f3e6;
      --bg-2: #f5d3a7;
      --ink: #2b2a28;
      --accent: #ff6b4a;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.86);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #ffe9d4 60%, #f9f2e9 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(860px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
      animation: rise 600ms ease;
    }

    header {
      display: flex;
      flex-direction: column;
      gap: 6px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.8rem);
      margin: 0;
    }

    .subtitle {
      margin: 0;
      color: #5f5c57;
      font-size: 1rem;
    }

    .tiles {
      display: grid;
      grid-template-columns: repeat(auto-fill, minmax(104px, 1fr));
      gap: 12px;
    }

    .tile {
      appearance: none;
      border: 1px solid rgba(47, 72, 88, 0.12);
      background: white;
      border-radius: 18px;
      padding: 14px 10px;
      cursor: pointer;
      display: grid;
      gap: 6px;
      justify-items: center;
      transition: transform 150ms ease, box-shadow 150ms ease, border-color 150ms ease;
      font-family: inherit;
    }

    .tile:active {
      transform: scale(0.97);
    }

    .tile.is-selected {
      border-color: var(--accent);
      box-shadow: 0 10px 24px rgba(255, 107, 74, 0.25);
    }

    .tile:disabled {
      opacity: 0.55;
      cursor: default;
    }

    .tile .emoji {
      font-size: 1.7rem;
    }

    .tile .label {
      font-size: 0.85rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    .tile.action .label {
      color: #8b857d;
    }

    .timer-card {
      background: white;
      border-radius: 20px;
      padding: 24px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 14px;
      justify-items: center;
    }

    .timer-meta {
      font-size: 0.95rem;
      color: #6b645d;
    }

    .timer-clock {
      font-size: clamp(2.4rem, 7vw, 3.6rem);
      font-weight: 600;
      font-variant-numeric: tabular-nums;
      color: var(--accent-2);
    }

    .btn-row {
      display: flex;
      flex-wrap: wrap;
      gap: 12px;
      justify-content: center;
    }

    button.btn {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 14px 22px;
      font-size: 1rem;
      font-weight: 600;
      cursor: pointer;
      font-family: inherit;
      transition: transform 150ms ease, box-shadow 150ms ease;
    }

    button.btn:active {
      transform: scale(0.98);
    }

    button.btn:disabled {
      opacity: 0.45;
      cursor: default;
    }

    .btn-start {
      background: var(--accent);
      color: white;
      box-shadow: 0 10px 24px rgba(255, 107, 74, 0.3);
    }

    .btn-stop {
      background: var(--accent-2);
      color: white;
      box-shadow: 0 10px 24px rgba(47, 72, 88, 0.3);
    }

    .btn-reset {
      background: rgba(47, 72, 88, 0.08);
      color: var(--accent-2);
    }

    .btn-ghost {
      background: rgba(47, 72, 88, 0.08);
      color: var(--accent-2);
    }

    .totals {
      display: grid;
      gap: 14px;
    }

    .totals h2 {
      margin: 0;
      font-size: 1.4rem;
    }

    .total-row {
      background: white;
      border-radius: 16px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      padding: 12px 16px;
      display: grid;
      gap: 8px;
    }

    .total-head {
      display: flex;
      justify-content: space-between;
      align-items: center;
      gap: 10px;
    }

    .total-name {
      display: flex;
      gap: 8px;
      align-items: center;
      font-weight: 600;
      color: var(--accent-2);
    }

    .total-value {
      color: #8b857d;
      font-weight: 600;
    }

    .bar {
      height: 8px;
      border-radius: 999px;
      background: rgba(47, 72, 88, 0.1);
      overflow: hidden;
    }

    .bar-fill {
      height: 100%;
      border-radius: 999px;
      background: linear-gradient(90deg, var(--accent), #ff9b6b);
      transition: width 300ms ease;
    }

    .status {
      font-size: 0.95rem;
      color: #6b645d;
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }

    .status[data-type="ok"] {
      color: #2d7a4b;
    }

    .modal-overlay {
      position: fixed;
      inset: 0;
      background: rgba(43, 42, 40, 0.4);
      display: grid;
      place-items: center;
      padding: 18px;
    }

    .modal-overlay[hidden] {
      display: none;
    }

    .modal-card {
      width: min(380px, 100%);
      background: white;
      border-radius: 20px;
      padding: 24px;
      display: grid;
      gap: 14px;
      box-shadow: var(--shadow);
    }

    .modal-card h3 {
      margin: 0;
    }

    .modal-field {
      display: grid;
      gap: 6px;
    }

    .modal-field .field-label {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #8b857d;
    }

    .modal-field input,
    .modal-field select {
      border: 1px solid rgba(47, 72, 88, 0.2);
      border-radius: 12px;
      padding: 10px 12px;
      font-size: 1rem;
      font-family: inherit;
    }

    .modal-actions {
      display: flex;
      justify-content: flex-end;
      gap: 10px;
    }

    .hint {
      margin: 0;
      color: #6f6a65;
      font-size: 0.9rem;
    }

    @keyframes rise {
      from {
        opacity: 0;
        transform: translateY(18px);
      }
      to {
        opacity: 1;
        transform: translateY(0);
      }
    }

    @media (max-width: 600px) {
      .app {
        padding: 28px 22px;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Activity Tracker</h1>
      <p class="subtitle">Pick an activity, start the timer, see where the day went.</p>
    </header>

    <section class="tiles" id="tiles"></section>

    <section class="timer-card">
      <div class="timer-meta" id="timer-meta">Select an activity to start</div>
      <div class="timer-clock" id="timer-clock">00:00:00</div>
      <div class="btn-row">
        <button class="btn btn-start" id="start-btn" type="button" disabled>Start</button>
        <button class="btn btn-stop" id="stop-btn" type="button" disabled>Stop &amp; Save</button>
        <button class="btn btn-reset" id="reset-btn" type="button">Reset Today</button>
      </div>
      <div class="status" id="status"></div>
    </section>

    <section class="totals">
      <h2>Today's totals <span class="subtitle" id="totals-date">{{DATE}}</span></h2>
      <div id="totals-rows"></div>
      <p class="hint">Totals are kept per calendar day (server time) and survive restarts.</p>
    </section>
  </main>

  <div class="modal-overlay" id="add-modal" hidden>
    <div class="modal-card">
      <h3>Add Activity</h3>
      <label class="modal-field">
        <span class="field-label">Activity name</span>
        <input id="add-label" placeholder="e.g., Study" />
      </label>
      <label class="modal-field">
        <span class="field-label">Emoji (paste one)</span>
        <input id="add-emoji" placeholder="e.g., 📖" />
      </label>
      <div class="modal-actions">
        <button class="btn btn-ghost" id="add-cancel" type="button">Cancel</button>
        <button class="btn btn-start" id="add-save" type="button">Save</button>
      </div>
    </div>
  </div>

  <div class="modal-overlay" id="delete-modal" hidden>
    <div class="modal-card">
      <h3>Delete Activity</h3>
      <label class="modal-field">
        <span class="field-label">Choose an activity</span>
        <select id="delete-select"></select>
      </label>
      <div class="modal-actions">
        <button class="btn btn-ghost" id="delete-cancel" type="button">Cancel</button>
        <button class="btn btn-stop" id="delete-confirm" type="button">Delete</button>
      </div>
    </div>
  </div>

  <script>
    const tilesEl = document.getElementById('tiles');
    const timerMetaEl = document.getElementById('timer-meta');
    const timerClockEl = document.getElementById('timer-clock');
    const startBtn = document.getElementById('start-btn');
    const stopBtn = document.getElementById('stop-btn');
    const resetBtn = document.getElementById('reset-btn');
    const statusEl = document.getElementById('status');
    const totalsRowsEl = document.getElementById('totals-rows');
    const totalsDateEl = document.getElementById('totals-date');

    const addModal = document.getElementById('add-modal');
    const addLabelInput = document.getElementById('add-label');
    const addEmojiInput = document.getElementById('add-emoji');
    const deleteModal = document.getElementById('delete-modal');
    const deleteSelect = document.getElementById('delete-select');

    let activities = [];
    let session = { selected: null, running: false, elapsed_ms: 0, clock: '00:00:00' };
    let pollId = null;

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const api = async (path, options) => {
      const res = await fetch(path, options);
      if (!res.ok) {
        throw new Error((await res.text()) || 'Request failed');
      }
      return res.status === 204 ? null : res.json();
    };

    // The 250ms tick lives and dies with the running state: started on
    // start, cleared on stop, on any idle poll result, and on page exit.
    const stopPolling = () => {
      if (pollId !== null) {
        clearInterval(pollId);
        pollId = null;
      }
    };

    const startPolling = () => {
      stopPolling();
      pollId = setInterval(() => {
        loadSession().catch((err) => setStatus(err.message, 'error'));
      }, 250);
    };

    const renderTiles = () => {
      tilesEl.innerHTML = '';
      activities.forEach((a) => {
        const tile = document.createElement('button');
        tile.type = 'button';
        tile.className = 'tile' + (session.selected === a.key ? ' is-selected' : '');
        tile.disabled = session.running;
        tile.innerHTML = '<span class="emoji">' + a.emoji + '</span><span class="label">' + a.label + '</span>';
        tile.addEventListener('click', () => {
          selectActivity(a.key).catch((err) => setStatus(err.message, 'error'));
        });
        tilesEl.appendChild(tile);
      });

      const addTile = document.createElement('button');
      addTile.type = 'button';
      addTile.className = 'tile action';
      addTile.disabled = session.running;
      addTile.innerHTML = '<span class="emoji">✚</span><span class="label">Add</span>';
      addTile.addEventListener('click', openAddModal);
      tilesEl.appendChild(addTile);

      const deleteTile = document.createElement('button');
      deleteTile.type = 'button';
      deleteTile.className = 'tile action';
      deleteTile.disabled = session.running || activities.length === 0;
      deleteTile.innerHTML = '<span class="emoji">🗑️</span><span class="label">Delete</span>';
      deleteTile.addEventListener('click', openDeleteModal);
      tilesEl.appendChild(deleteTile);
    };

    const renderTimer = () => {
      timerClockEl.textContent = session.clock;
      timerMetaEl.textContent = session.running
        ? 'Running'
        : session.selected
          ? 'Ready'
          : 'Select an activity to start';
      startBtn.disabled = session.running || !session.selected;
      stopBtn.disabled = !session.running;
      resetBtn.disabled = session.running;
    };

    const applySession = (next) => {
      const wasRunning = session.running;
      session = next;
      if (!session.running) {
        stopPolling();
        if (wasRunning) {
          loadTotals().catch((err) => setStatus(err.message, 'error'));
        }
      }
      renderTimer();
      renderTiles();
    };

    const renderTotals = (totals) => {
      totalsDateEl.textContent = totals.date;
      totalsRowsEl.innerHTML = '';
      totals.rows.forEach((row) => {
        const el = document.createElement('div');
        el.className = 'total-row';
        el.innerHTML =
          '<div class="total-head">' +
          '<span class="total-name"><span>' + row.emoji + '</span><span>' + row.label + '</span></span>' +
          '<span class="total-value">' + row.display + '</span>' +
          '</div>' +
          '<div class="bar"><div class="bar-fill" style="width:' + row.pct + '%"></div></div>';
        totalsRowsEl.appendChild(el);
      });
    };

    const loadActivities = async () => {
      activities = await api('/api/activities');
      renderTiles();
    };

    const loadSession = async () => {
      applySession(await api('/api/session'));
    };

    const loadTotals = async () => {
      renderTotals(await api('/api/totals'));
    };

    const selectActivity = async (key) => {
      applySession(await api('/api/session/select', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({ key })
      }));
    };

    startBtn.addEventListener('click', () => {
      api('/api/session/start', { method: 'POST' })
        .then((next) => {
          applySession(next);
          if (next.running) {
            startPolling();
          }
        })
        .catch((err) => setStatus(err.message, 'error'));
    });

    stopBtn.addEventListener('click', () => {
      stopPolling();
      api('/api/session/stop', { method: 'POST' })
        .then((next) => {
          applySession(next);
          setStatus('Saved', 'ok');
          setTimeout(() => setStatus('', ''), 1200);
        })
        .catch((err) => setStatus(err.message, 'error'));
    });

    resetBtn.addEventListener('click', () => {
      api('/api/totals/reset', { method: 'POST' })
        .then((totals) => {
          renderTotals(totals);
          setStatus('Totals cleared', 'ok');
          setTimeout(() => setStatus('', ''), 1200);
        })
        .catch((err) => setStatus(err.message, 'error'));
    });

    function openAddModal() {
      addLabelInput.value = '';
      addEmojiInput.value = '';
      addModal.hidden = false;
      addLabelInput.focus();
    }

    document.getElementById('add-cancel').addEventListener('click', () => {
      addModal.hidden = true;
    });

    document.getElementById('add-save').addEventListener('click', () => {
      const label = addLabelInput.value.trim();
      const emoji = addEmojiInput.value.trim();
      if (!label || !emoji) {
        setStatus('Name and emoji are required', 'error');
        return;
      }
      api('/api/activities', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({ label, emoji })
      })
        .then(async () => {
          addModal.hidden = true;
          await loadActivities();
          await loadSession();
          await loadTotals();
        })
        .catch((err) => setStatus(err.message, 'error'));
    });

    function openDeleteModal() {
      deleteSelect.innerHTML = '';
      activities.forEach((a) => {
        const option = document.createElement('option');
        option.value = a.key;
        option.textContent = a.emoji + ' ' + a.label;
        deleteSelect.appendChild(option);
      });
      deleteModal.hidden = false;
    }

    document.getElementById('delete-cancel').addEventListener('click', () => {
      deleteModal.hidden = true;
    });

    document.getElementById('delete-confirm').addEventListener('click', () => {
      const key = deleteSelect.value;
      if (!key) {
        return;
      }
      api('/api/activities/' + encodeURIComponent(key), { method: 'DELETE' })
        .then(async () => {
          deleteModal.hidden = true;
          await loadActivities();
          await loadSession();
          await loadTotals();
        })
        .catch((err) => setStatus(err.message, 'error'));
    });

    addModal.addEventListener('click', (event) => {
      if (event.target === addModal) {
        addModal.hidden = true;
      }
    });

    deleteModal.addEventListener('click', (event) => {
      if (event.target === deleteModal) {
        deleteModal.hidden = true;
      }
    });

    window.addEventListener('beforeunload', stopPolling);

    Promise.all([loadActivities(), loadSession(), loadTotals()])
      .then(() => {
        if (session.running) {
          startPolling();
        }
      })
      .catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_injects_the_date() {
        let page = render_index("2024-01-01");
        assert!(page.contains("2024-01-01"));
        assert!(!page.contains("{{DATE}}"));
    }
}
