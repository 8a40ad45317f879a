pub fn render_index(today: &str, month_label: &str) -> String {
    INDEX_HTML
        .replace("{{TODAY}}", today)
        .replace("{{MONTH}}", month_label)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Fitness Tracker</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #eef4ee;
      --bg-2: #bfe0c9;
      --ink: #25302a;
      --accent: #2f8f5b;
      --accent-2: #2f4858;
      --muted: #7b847e;
      --card: rgba(255, 255, 255, 0.88);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.16);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #e3f1e6 60%, #f4f8f3 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(960px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-size: clamp(2rem, 4vw, 2.6rem);
      margin: 0;
    }

    h2 {
      margin: 0 0 12px;
      font-size: 1.2rem;
    }

    .subtitle {
      margin: 0;
      color: var(--muted);
    }

    .panels {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
      gap: 18px;
    }

    .card {
      background: white;
      border-radius: 20px;
      padding: 20px;
      border: 1px solid rgba(47, 72, 88, 0.08);
    }

    .timer {
      font-size: 3rem;
      font-weight: 600;
      color: var(--accent-2);
      margin: 8px 0 16px;
    }

    .stats {
      display: flex;
      gap: 24px;
      margin-top: 12px;
    }

    .stats .label {
      display: block;
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: var(--muted);
    }

    .stats .value {
      font-size: 1.5rem;
      font-weight: 600;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 10px 16px;
      font-size: 0.95rem;
      font-weight: 600;
      cursor: pointer;
      background: var(--accent);
      color: white;
    }

    button.secondary {
      background: #e6ece8;
      color: var(--ink);
    }

    .weekly-list {
      list-style: none;
      margin: 0;
      padding: 0;
      display: grid;
      gap: 8px;
    }

    .weekly-list li {
      display: flex;
      justify-content: space-between;
      gap: 12px;
      font-size: 0.9rem;
    }

    .calendar-header {
      display: flex;
      align-items: center;
      justify-content: space-between;
      margin-bottom: 12px;
    }

    .weekday-row,
    .calendar-grid {
      display: grid;
      grid-template-columns: repeat(7, 1fr);
      gap: 6px;
    }

    .weekday-row span {
      text-align: center;
      font-size: 0.8rem;
      color: var(--muted);
    }

    .day {
      border-radius: 12px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      padding: 6px;
      min-height: 96px;
      display: grid;
      gap: 4px;
      align-content: start;
      font-size: 0.75rem;
    }

    .day.outside {
      opacity: 0.45;
    }

    .day.today {
      border-color: var(--accent);
      box-shadow: 0 0 0 2px rgba(47, 143, 91, 0.2);
    }

    .day-number {
      font-weight: 600;
    }

    .chip {
      padding: 3px 6px;
      font-size: 0.7rem;
      background: #eef1ef;
      color: var(--ink);
    }

    .chip.done {
      background: var(--accent);
      color: white;
    }

    .error-text,
    .status[data-type="error"] {
      color: #c63b2b;
    }

    .status[data-type="ok"] {
      color: #2d7a4b;
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Fitness Tracker</h1>
      <p class="subtitle">Today is <span id="todayText">{{TODAY}}</span>.</p>
    </header>

    <section class="panels">
      <div class="card">
        <h2>Daily plank</h2>
        <div class="timer" id="timer">01:00</div>
        <button id="startPauseBtn" type="button">Start</button>
        <button id="resetBtn" class="secondary" type="button">Reset</button>
        <button id="markPlankBtn" class="secondary" type="button">Mark done</button>
        <p id="plankStatus" class="subtitle">Plank not completed yet today</p>
        <div class="stats">
          <div><span class="label">Streak</span><span class="value" id="streakValue">0 days</span></div>
          <div><span class="label">Total</span><span class="value" id="totalValue">0</span></div>
        </div>
      </div>

      <div class="card">
        <h2>Weekly plan</h2>
        <p id="startDateText" class="subtitle"></p>
        <ul class="weekly-list" id="weeklyList"></ul>
      </div>
    </section>

    <section class="card">
      <div class="calendar-header">
        <button id="prevMonth" class="secondary" type="button">&larr;</button>
        <h2 id="monthLabel">{{MONTH}}</h2>
        <button id="nextMonth" class="secondary" type="button">&rarr;</button>
      </div>
      <div class="weekday-row" id="weekdayRow"></div>
      <div class="calendar-grid" id="calendarGrid"></div>
    </section>

    <section class="card">
      <h2>Backup</h2>
      <button id="exportBtn" type="button">Export data</button>
      <input id="importInput" type="file" accept="application/json" />
      <p class="status" id="status"></p>
    </section>

    <template id="dayCellTemplate">
      <div class="day">
        <span class="day-number"></span>
        <span class="workout-text"></span>
        <button class="chip workout-chip" type="button">Workout</button>
        <button class="chip plank-chip" type="button">Plank</button>
      </div>
    </template>
  </main>

  <script>
    const showError = (message) => {
      const existing = document.getElementById('appError');
      if (existing) existing.remove();
      const note = document.createElement('p');
      note.id = 'appError';
      note.className = 'error-text';
      note.textContent = message;
      (document.querySelector('.app') || document.body).prepend(note);
    };

    const initApp = () => {
      const ids = [
        'timer', 'startPauseBtn', 'resetBtn', 'markPlankBtn', 'plankStatus', 'streakValue',
        'totalValue', 'weeklyList', 'startDateText', 'monthLabel', 'weekdayRow', 'calendarGrid',
        'prevMonth', 'nextMonth', 'exportBtn', 'importInput', 'dayCellTemplate', 'status'
      ];
      const el = {};
      ids.forEach((id) => { el[id] = document.getElementById(id); });
      if (ids.some((id) => !el[id])) {
        showError('Could not load all app sections. Please refresh the page.');
        return;
      }

      let view = null;
      let timerRunning = false;
      let pollId = null;

      const setStatus = (message, type) => {
        el.status.textContent = message;
        el.status.dataset.type = type || '';
      };

      const request = async (path, options) => {
        const res = await fetch(path, options);
        if (!res.ok) {
          const msg = await res.text();
          throw new Error(msg || 'Request failed');
        }
        return res.json();
      };

      const post = (path, body) => request(path, {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: body === undefined ? undefined : JSON.stringify(body)
      });

      const renderTimer = (timer) => {
        el.timer.textContent = timer.display;
        timerRunning = timer.running;
        el.startPauseBtn.textContent = timer.running ? 'Pause' : 'Start';
        if (timer.running && !pollId) {
          pollId = setInterval(() => {
            request('/api/timer').then((next) => {
              renderTimer(next);
              if (!next.running) refresh();
            }).catch((err) => setStatus(err.message, 'error'));
          }, 1000);
        } else if (!timer.running && pollId) {
          clearInterval(pollId);
          pollId = null;
        }
      };

      const renderSummary = (summary) => {
        el.totalValue.textContent = `${summary.total_planks}`;
        el.streakValue.textContent = `${summary.streak} days`;
        el.plankStatus.textContent = summary.plank_done_today
          ? 'Plank complete for today ✅'
          : 'Plank not completed yet today';
        renderTimer(summary.timer);
      };

      const renderSchedule = (schedule) => {
        el.startDateText.textContent = `Tracking cycle started: ${schedule.tracking_start_date}`;
        el.weeklyList.innerHTML = '';
        schedule.plan.forEach((entry) => {
          const li = document.createElement('li');
          const left = document.createElement('strong');
          left.textContent = entry.weekday;
          const right = document.createElement('span');
          right.textContent = entry.activity;
          li.append(left, right);
          el.weeklyList.appendChild(li);
        });
      };

      const toggle = (kind, date) => {
        post('/api/toggle', { kind, date })
          .then(refresh)
          .catch((err) => setStatus(err.message, 'error'));
      };

      const renderCalendar = (calendar) => {
        view = { year: calendar.year, month: calendar.month };
        el.monthLabel.textContent = calendar.label;
        el.weekdayRow.innerHTML = '';
        calendar.weekdays.forEach((day) => {
          const span = document.createElement('span');
          span.textContent = day;
          el.weekdayRow.appendChild(span);
        });

        el.calendarGrid.innerHTML = '';
        calendar.cells.forEach((cell) => {
          const node = el.dayCellTemplate.content.firstElementChild.cloneNode(true);
          if (!cell.is_current_month) node.classList.add('outside');
          if (cell.is_today) node.classList.add('today');
          node.querySelector('.day-number').textContent = cell.day;
          node.querySelector('.workout-text').textContent = cell.workout_text;
          const workoutChip = node.querySelector('.workout-chip');
          const plankChip = node.querySelector('.plank-chip');
          if (cell.workout_done) workoutChip.classList.add('done');
          if (cell.plank_done) plankChip.classList.add('done');
          workoutChip.addEventListener('click', () => toggle('workout', cell.date));
          plankChip.addEventListener('click', () => toggle('plank', cell.date));
          el.calendarGrid.appendChild(node);
        });
      };

      const calendarPath = (year, month, nav) => {
        if (year === undefined) return '/api/calendar';
        const path = `/api/calendar?year=${year}&month=${month}`;
        return nav ? `${path}&nav=${nav}` : path;
      };

      const loadCalendar = (year, month, nav) =>
        request(calendarPath(year, month, nav)).then(renderCalendar);

      const refresh = () => Promise.all([
        request('/api/summary').then(renderSummary),
        request('/api/schedule').then(renderSchedule),
        view ? loadCalendar(view.year, view.month) : loadCalendar()
      ]).catch((err) => setStatus(err.message, 'error'));

      el.startPauseBtn.addEventListener('click', () => {
        post(timerRunning ? '/api/timer/pause' : '/api/timer/start')
          .then(renderTimer)
          .catch((err) => setStatus(err.message, 'error'));
      });
      el.resetBtn.addEventListener('click', () => {
        post('/api/timer/reset').then(renderTimer).catch((err) => setStatus(err.message, 'error'));
      });
      el.markPlankBtn.addEventListener('click', () => {
        post('/api/plank').then(refresh).catch((err) => setStatus(err.message, 'error'));
      });
      el.prevMonth.addEventListener('click', () => {
        loadCalendar(view.year, view.month, 'prev').catch((err) => setStatus(err.message, 'error'));
      });
      el.nextMonth.addEventListener('click', () => {
        loadCalendar(view.year, view.month, 'next').catch((err) => setStatus(err.message, 'error'));
      });
      el.exportBtn.addEventListener('click', () => {
        const a = document.createElement('a');
        a.href = '/api/export';
        document.body.appendChild(a);
        a.click();
        a.remove();
      });
      el.importInput.addEventListener('change', (event) => {
        const file = event.target.files[0];
        if (!file) return;
        file.text()
          .then((text) => request('/api/import', { method: 'POST', body: text }))
          .then((result) => {
            setStatus(result.message, 'ok');
            return refresh();
          })
          .catch(() => setStatus('Could not import data. Please choose a valid export JSON file.', 'error'));
      });

      refresh();
    };

    document.addEventListener('DOMContentLoaded', () => {
      try {
        initApp();
      } catch (err) {
        showError('The app failed to initialize. Please reload and try again.');
      }
    });
  </script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_fills_placeholders() {
        let html = render_index("2024-06-12", "June 2024");
        assert!(html.contains("2024-06-12"));
        assert!(html.contains("June 2024"));
        assert!(!html.contains("{{"));
    }
}
